// src/db/sample_data.rs
//
// Built-in sample dataset
//
// Seeded on first start (or whenever no usable snapshot exists) so the tool
// is explorable without any setup. Ids here are short fixed strings; newly
// created records get generated ids instead.

use crate::db::dataset::Dataset;
use crate::domain::{Book, Chapter, Character, CharacterRelation, GlossaryTerm};

fn book(id: &str, title: &str, author: &str, genre: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        cover_url: format!("https://picsum.photos/seed/{}/300/400", id),
    }
}

fn term(id: &str, original: &str, translation: &str, book_id: &str) -> GlossaryTerm {
    GlossaryTerm {
        id: id.to_string(),
        original: original.to_string(),
        translation: translation.to_string(),
        book_id: book_id.to_string(),
    }
}

/// The sample dataset: four well-known novels, two chapters of the first one,
/// its glossary, and a small character cast with one address relation each way.
pub fn sample_dataset() -> Dataset {
    let books = vec![
        book("1", "Đấu Phá Thương Khung", "Thiên Tằm Thổ Đậu", "Tiên Hiệp"),
        book("2", "Phàm Nhân Tu Tiên", "Vong Ngữ", "Tiên Hiệp"),
        book("3", "Toàn Chức Cao Thủ", "Hồ Điệp Lam", "Võng Du"),
        book("4", "Thần Mộ", "Thần Đông", "Huyền Huyễn"),
    ];

    let chapters = vec![
        Chapter {
            id: "101".to_string(),
            book_id: "1".to_string(),
            title: "Chương 1: Thiên tài vẫn lạc".to_string(),
            original_content: "“斗之力，三段！”\n\n望着测验魔石碑上面闪亮得甚至有些刺眼的五个大字，少年面无表情，唇角有着一抹自嘲，紧握的手掌，因为大力，而导致略微尖锐的指甲深深的刺进了掌心之中，带来一阵阵钻心的疼痛…".to_string(),
            translated_content: String::new(),
        },
        Chapter {
            id: "102".to_string(),
            book_id: "1".to_string(),
            title: "Chương 2: Khách nhân".to_string(),
            original_content: "翌日，当第一缕晨辉倾洒在萧家庄园时，那紧闭了一夜的庄园大门，便是被缓缓打开，旋即，一队队身着劲装的护卫，有条不紊的涌泉而出，然后分部在庄园的各个出口，开始了新一天的防御工作。".to_string(),
            translated_content: "Ngày hôm sau, khi những tia nắng ban mai đầu tiên chiếu rọi trang viên Tiêu gia, cánh cổng lớn đã đóng chặt suốt đêm cũng từ từ mở ra. Ngay sau đó, từng đội hộ vệ mặc trang phục gọn gàng, trật tự tuôn ra như suối, rồi phân bố ở các lối ra của trang viên, bắt đầu công việc phòng ngự cho một ngày mới.".to_string(),
        },
    ];

    let glossary = vec![
        term("g1", "斗气", "Đấu Khí", "1"),
        term("g2", "魂殿", "Hồn Điện", "1"),
        term("g3", "魔兽", "Ma Thú", "1"),
        term("g4", "炼药师", "Luyện Dược Sư", "1"),
        term("g5", "Thất Huyền Môn", "Thất Huyền Môn", "2"),
        term("g6", "Hàn Lập", "Hàn Lập", "2"),
        term("g7", "Quân Mạc Tiếu", "Quân Mạc Tiếu", "3"),
    ];

    let characters = vec![
        Character {
            id: "c1".to_string(),
            name_cn: "萧炎".to_string(),
            name_vi: "Tiêu Viêm".to_string(),
            alias: "Viêm Đế".to_string(),
            notes: Some("Nhân vật chính, ban đầu là thiên tài sau đó trở thành phế vật, có ý chí kiên cường.".to_string()),
            address_3rd: Some("thiếu niên".to_string()),
        },
        Character {
            id: "c2".to_string(),
            name_cn: "纳兰嫣然".to_string(),
            name_vi: "Nạp Lan Yên Nhiên".to_string(),
            alias: "Vân Lam Tông Thiếu Tông Chủ".to_string(),
            notes: Some("Hôn thê của Tiêu Viêm, chủ động từ hôn.".to_string()),
            address_3rd: Some("cô gái".to_string()),
        },
        Character {
            id: "c3".to_string(),
            name_cn: "药尘".to_string(),
            name_vi: "Dược Trần".to_string(),
            alias: "Dược Lão".to_string(),
            notes: Some("Luyện dược sư số một đại lục, tồn tại dưới dạng linh hồn trong chiếc nhẫn của Tiêu Viêm.".to_string()),
            address_3rd: Some("lão giả".to_string()),
        },
    ];

    let relations = vec![
        CharacterRelation {
            id: "r1".to_string(),
            from: "c1".to_string(),
            to: "c3".to_string(),
            address: "lão sư".to_string(),
        },
        CharacterRelation {
            id: "r2".to_string(),
            from: "c2".to_string(),
            to: "c1".to_string(),
            address: "Tiêu Viêm".to_string(),
        },
    ];

    Dataset {
        books,
        chapters,
        glossary,
        characters,
        relations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_book, validate_character, validate_chapter,
        validate_glossary_term, validate_relation};

    #[test]
    fn test_sample_counts() {
        let data = sample_dataset();
        assert_eq!(data.books.len(), 4);
        assert_eq!(data.chapters.len(), 2);
        assert_eq!(data.glossary.len(), 7);
        assert_eq!(data.characters.len(), 3);
        assert_eq!(data.relations.len(), 2);
    }

    #[test]
    fn test_sample_data_satisfies_invariants() {
        let data = sample_dataset();
        for b in &data.books {
            validate_book(b).unwrap();
        }
        for c in &data.chapters {
            validate_chapter(c).unwrap();
        }
        for g in &data.glossary {
            validate_glossary_term(g).unwrap();
        }
        for c in &data.characters {
            validate_character(c).unwrap();
        }
        for r in &data.relations {
            validate_relation(r).unwrap();
        }
    }

    #[test]
    fn test_sample_references_resolve() {
        let data = sample_dataset();
        for chapter in &data.chapters {
            assert!(data.books.iter().any(|b| b.id == chapter.book_id));
        }
        for term in &data.glossary {
            assert!(data.books.iter().any(|b| b.id == term.book_id));
        }
        for relation in &data.relations {
            assert!(data.characters.iter().any(|c| c.id == relation.from));
            assert!(data.characters.iter().any(|c| c.id == relation.to));
        }
    }
}

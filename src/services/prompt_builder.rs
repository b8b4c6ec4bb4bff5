// src/services/prompt_builder.rs
//
// Translation prompt composition
//
// CRITICAL RULES:
// - Pure: no state, no side effects, no clock
// - Byte-identical output for identical input
// - A relation whose endpoints do not resolve against the supplied cast is
//   dropped from the output, never an error

use crate::domain::{Character, CharacterRelation, GlossaryTerm};

/// Placeholder for an absent alias or absent notes
const NONE_PLACEHOLDER: &str = "Không có";

/// Placeholder when no third-person address form is set
const DEFAULT_ADDRESS: &str = "Mặc định theo tên";

/// Render glossary terms as newline-separated `original: translation` pairs
///
/// Order is whatever the caller supplies; the repository has already applied
/// collation.
pub fn glossary_block(terms: &[GlossaryTerm]) -> String {
    terms
        .iter()
        .map(|t| format!("{}: {}", t.original, t.translation))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render each character as a fixed-template profile block
pub fn character_block(characters: &[Character]) -> String {
    characters
        .iter()
        .map(|c| {
            let alias = if c.alias.is_empty() {
                NONE_PLACEHOLDER
            } else {
                c.alias.as_str()
            };
            let address = c
                .address_3rd
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_ADDRESS);
            let notes = c
                .notes
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(NONE_PLACEHOLDER);

            format!(
                "- Tên: {} ({})\n- Biệt danh: {}\n- Xưng hô ngôi thứ 3 (narrator): {}\n- Ghi chú: {}\n",
                c.name_vi, c.name_cn, alias, address, notes
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one `A gọi B là: X` line per relation that resolves
pub fn relation_block(relations: &[CharacterRelation], characters: &[Character]) -> String {
    relations
        .iter()
        .filter_map(|r| {
            let from = characters.iter().find(|c| c.id == r.from)?;
            let to = characters.iter().find(|c| c.id == r.to)?;
            Some(format!("{} gọi {} là: {}", from.name_vi, to.name_vi, r.address))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose the full instruction + context + source text prompt
pub fn build_translation_prompt(
    terms: &[GlossaryTerm],
    characters: &[Character],
    relations: &[CharacterRelation],
    source_text: &str,
) -> String {
    format!(
        "Bạn là một dịch giả chuyên nghiệp chuyên dịch truyện tiên hiệp, huyền huyễn từ tiếng Trung sang tiếng Việt.\n\
Dịch một cách tự nhiên, văn phong mượt mà, phù hợp với ngữ cảnh của truyện.\n\
Tuyệt đối tuân thủ các thuật ngữ đã được cung cấp cho truyện này.\n\
\n\
---\n\
DANH SÁCH THUẬT NGỮ CỦA TRUYỆN (Original: Translation):\n\
{glossary}\n\
---\n\
THÔNG TIN CHI TIẾT NHÂN VẬT:\n\
Sử dụng các thông tin sau để hiểu rõ bối cảnh và tính cách nhân vật, từ đó quyết định văn phong và cách xưng hô cho phù hợp.\n\
{characters}\n\
---\n\
QUAN HỆ XƯNG HÔ:\n\
Dựa vào các mối quan hệ sau đây để suy ra cách xưng hô phù hợp trong đối thoại. Mối quan hệ này có tính hai chiều, hãy tự suy luận cách xưng hô đáp lại. Ví dụ, nếu 'A gọi B là lão sư', thì B có thể gọi lại A là 'tiểu tử' hoặc 'đồ nhi' tùy ngữ cảnh.\n\
{relations}\n\
---\n\
\n\
BẮT ĐẦU DỊCH NỘI DUNG SAU:\n\
\n\
{source}",
        glossary = glossary_block(terms),
        characters = character_block(characters),
        relations = relation_block(relations, characters),
        source = source_text,
    )
}

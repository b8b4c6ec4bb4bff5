// src/services/character_service_tests.rs
//
// UNIT TESTS: Character and relation management
//
// INVARIANTS TESTED:
// - Self-addressing relations never reach the repository
// - Relation endpoints must exist at creation time
// - Deleting a character removes every relation on either side of it

#[cfg(test)]
mod character_tests {
    use std::sync::Arc;

    use crate::db::{DataStore, MemorySnapshotStore};
    use crate::domain::DomainError;
    use crate::error::AppError;
    use crate::events::{create_event_bus, CharacterDeleted, EventBus};
    use crate::repositories::{StoreCharacterRepository, StoreRelationRepository};
    use crate::services::{CharacterService, CreateCharacterRequest, CreateRelationRequest};

    fn service() -> (CharacterService, EventBus) {
        let events = create_event_bus();
        let store = Arc::new(DataStore::open(
            Arc::new(MemorySnapshotStore::new()),
            events.clone(),
        ));

        let service = CharacterService::new(
            Arc::new(StoreCharacterRepository::new(Arc::clone(&store))),
            Arc::new(StoreRelationRepository::new(store)),
            events.clone(),
        );
        (service, events)
    }

    #[test]
    fn test_create_character_with_optional_fields() {
        let (service, _) = service();
        let character = service
            .create_character(CreateCharacterRequest {
                name_cn: "韩立".to_string(),
                name_vi: "Hàn Lập".to_string(),
                alias: "Hàn lão ma".to_string(),
                notes: None,
                address_3rd: Some("hắn".to_string()),
            })
            .unwrap();

        assert_eq!(service.list_characters().unwrap().len(), 4);
        assert!(character.notes.is_none());
        assert_eq!(character.address_3rd.as_deref(), Some("hắn"));
    }

    #[test]
    fn test_create_character_requires_both_names() {
        let (service, _) = service();
        let result = service.create_character(CreateCharacterRequest {
            name_cn: String::new(),
            name_vi: "Hàn Lập".to_string(),
            alias: String::new(),
            notes: None,
            address_3rd: None,
        });

        assert!(matches!(result, Err(AppError::Domain(_))));
        assert_eq!(service.list_characters().unwrap().len(), 3);
    }

    #[test]
    fn test_self_addressing_relation_is_rejected_for_any_id() {
        let (service, _) = service();

        for id in ["c1", "c2", "c3"] {
            let result = service.create_relation(CreateRelationRequest {
                from: id.to_string(),
                to: id.to_string(),
                address: "ta".to_string(),
            });

            assert!(matches!(
                result,
                Err(AppError::Domain(DomainError::SelfReferentialRelation))
            ));
        }

        assert_eq!(service.list_relations().unwrap().len(), 2);
    }

    #[test]
    fn test_relation_endpoints_must_exist() {
        let (service, _) = service();
        let result = service.create_relation(CreateRelationRequest {
            from: "c1".to_string(),
            to: "ghost".to_string(),
            address: "đạo hữu".to_string(),
        });

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn test_relation_address_cannot_be_blank() {
        let (service, _) = service();
        let result = service.create_relation(CreateRelationRequest {
            from: "c2".to_string(),
            to: "c3".to_string(),
            address: "  ".to_string(),
        });

        assert!(matches!(result, Err(AppError::Domain(_))));
    }

    #[test]
    fn test_create_relation_between_existing_characters() {
        let (service, _) = service();
        let relation = service
            .create_relation(CreateRelationRequest {
                from: "c3".to_string(),
                to: "c1".to_string(),
                address: "tiểu tử".to_string(),
            })
            .unwrap();

        assert!(!relation.id.is_empty());
        assert_eq!(service.list_relations().unwrap().len(), 3);
    }

    #[test]
    fn test_delete_character_cascades_relations() {
        let (service, events) = service();

        let removed = Arc::new(std::sync::Mutex::new(Vec::new()));
        let removed_clone = Arc::clone(&removed);
        events.subscribe::<CharacterDeleted, _>(move |event| {
            removed_clone.lock().unwrap().push(event.relations_removed);
        });

        // c1 appears in both sample relations, once per direction
        service.delete_character("c1").unwrap();

        assert_eq!(service.list_characters().unwrap().len(), 2);
        assert!(service.list_relations().unwrap().is_empty());
        assert_eq!(*removed.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_delete_character_leaves_unrelated_relations() {
        let (service, _) = service();

        // c2 only addresses c1 (r2); r1 is between c1 and c3
        service.delete_character("c2").unwrap();

        let relations = service.list_relations().unwrap();
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].id, "r1");
    }

    #[test]
    fn test_delete_missing_character_is_not_found() {
        let (service, _) = service();
        assert!(matches!(
            service.delete_character("ghost"),
            Err(AppError::NotFound)
        ));
    }
}

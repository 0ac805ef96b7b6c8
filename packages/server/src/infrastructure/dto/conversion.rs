//! Conversion logic between wire DTOs and domain entities.

use hiroba_shared::protocol as dto;

use crate::domain::entity;

impl From<dto::ChatEntry> for entity::ChatEntry {
    fn from(dto: dto::ChatEntry) -> Self {
        Self::new(dto.user, dto.message)
    }
}

impl From<entity::ChatEntry> for dto::ChatEntry {
    fn from(model: entity::ChatEntry) -> Self {
        Self::new(model.user, model.message)
    }
}

/// Build the `new-message` payload from a log snapshot
pub fn to_log_payload(entries: &[entity::ChatEntry]) -> dto::MessageLogPayload {
    dto::MessageLogPayload {
        messages: entries.iter().cloned().map(Into::into).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_entry_to_domain() {
        // テスト項目: DTO の ChatEntry がドメインエンティティに変換される
        // given (前提条件):
        let dto_entry = dto::ChatEntry::new("alice", "Hello!");

        // when (操作):
        let domain_entry: entity::ChatEntry = dto_entry.into();

        // then (期待する結果):
        assert_eq!(domain_entry, entity::ChatEntry::new("alice", "Hello!"));
    }

    #[test]
    fn test_log_payload_preserves_append_order() {
        // テスト項目: new-message ペイロードはログの追加順を保つ
        // given (前提条件):
        let entries = vec![
            entity::ChatEntry::presence(1),
            entity::ChatEntry::presence(2),
            entity::ChatEntry::new("A", "hi"),
        ];

        // when (操作):
        let payload = to_log_payload(&entries);

        // then (期待する結果):
        assert_eq!(
            payload.messages,
            vec![
                dto::ChatEntry::new("System", "1 users are connected"),
                dto::ChatEntry::new("System", "2 users are connected"),
                dto::ChatEntry::new("A", "hi"),
            ]
        );
    }
}

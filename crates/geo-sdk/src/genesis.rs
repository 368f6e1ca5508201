//! Well-known system ids of the Geo knowledge graph.
//!
//! Every id here is a fixed constant decoded at compile time.

use crate::codec::bytes::hex_literal;
use crate::model::Id;

const fn id(hex: &str) -> Id {
    Id::from_bytes(hex_literal(hex))
}

/// Core property ids.
pub mod properties {
    use super::id;
    use crate::model::Id;

    const NAME: Id = id("a126ca530c8e48d5b88882c734c38935");
    const DESCRIPTION: Id = id("9b1f76ff9711404c861e59dc3fa7d037");
    const COVER: Id = id("34f535072e6b42c5a84443981a77cfa2");
    const TYPES: Id = id("8f151ba4de204e3c9cb499ddf96f48f1");
    const DATA_TYPE: Id = id("6d29d57849bb4959baf72cc696b1671a");
    const PROPERTIES: Id = id("01412f8381894ab1836565c7fd358cc1");
    const RELATION_VALUE_TYPES: Id = id("cfa6a2f5151f43bfa684f7f0228f63ff");

    pub fn name() -> Id {
        NAME
    }

    pub fn description() -> Id {
        DESCRIPTION
    }

    pub fn cover() -> Id {
        COVER
    }

    /// Relation type linking an entity to each of its types.
    pub fn types() -> Id {
        TYPES
    }

    /// Relation type linking a property to its data type.
    pub fn data_type() -> Id {
        DATA_TYPE
    }

    /// Relation type linking a type (or relation property) to its properties.
    pub fn properties() -> Id {
        PROPERTIES
    }

    /// Relation type linking a relation property to the types it may point at.
    pub fn relation_value_types() -> Id {
        RELATION_VALUE_TYPES
    }
}

/// Core type ids.
pub mod types {
    use super::id;
    use crate::model::Id;

    const PROPERTY: Id = id("808a04ceb21c4d888ad12e240613e5ca");
    const SCHEMA_TYPE: Id = id("e7d737c536764c609fa16aa64a8c90ad");
    const SPACE: Id = id("362c1dbddc6444bba3c4652f38a642d7");

    pub fn property() -> Id {
        PROPERTY
    }

    /// The type of types.
    pub fn schema_type() -> Id {
        SCHEMA_TYPE
    }

    pub fn space() -> Id {
        SPACE
    }
}

/// Data-type entity ids.
pub mod data_types {
    use super::id;
    use crate::model::{DataType, Id};

    const BOOLEAN: Id = id("fa6a11b06c6e895e86e7a950a31a8767");
    const INTEGER: Id = id("6d670d0b42138923b3d18dd0bb6caf09");
    const FLOAT: Id = id("49b8233dfb8d89e7b15efef9f07aaa33");
    const DECIMAL: Id = id("7bdec85eba3e8ed9a420e12b259c8b2d");
    const TEXT: Id = id("d11a158ee0ca8150995d768a9e6b93f2");
    const BYTES: Id = id("cf5fc8c470cb84a2b53f4c9b7c6f3d2b");
    const DATE: Id = id("34cc53309e338312b1044b65e78c78a9");
    const TIME: Id = id("27f1185c2ef583d4a4fae6f8494fe9d6");
    const DATETIME: Id = id("a06972d7126d86d48f8f8221d41c6446");
    const SCHEDULE: Id = id("937308bb22798e829d2d950a218d3013");
    const POINT: Id = id("758150be99dc837e94bd7b9153b57c5f");
    const EMBEDDING: Id = id("a09b287e52098427ae740f784004a3bc");
    const RELATION: Id = id("adada4fe33628e17ae77bf023234d925");

    /// Returns the entity id for a data type.
    pub fn id_for(data_type: DataType) -> Id {
        match data_type {
            DataType::Boolean => BOOLEAN,
            DataType::Integer => INTEGER,
            DataType::Float => FLOAT,
            DataType::Decimal => DECIMAL,
            DataType::Text => TEXT,
            DataType::Bytes => BYTES,
            DataType::Date => DATE,
            DataType::Time => TIME,
            DataType::Datetime => DATETIME,
            DataType::Schedule => SCHEDULE,
            DataType::Point => POINT,
            DataType::Embedding => EMBEDDING,
            DataType::Relation => RELATION,
        }
    }

    pub fn relation() -> Id {
        RELATION
    }
}

/// Language entity ids.
pub mod languages {
    use super::id;
    use crate::model::Id;

    /// Known languages by BCP 47 code.
    pub const LANGUAGES: &[(&str, Id)] = &[
        ("en", id("090adac0fca4822e8e719263e67620ec")),
        ("es", id("937ac43388f482408e2e49c14f5c060b")),
        ("fr", id("17365896ee938ff89f125c9e883a039d")),
        ("de", id("4bbc27c745048ec7938169437eb77384")),
        ("it", id("06aa6437ff5b866798185da1811a3644")),
        ("pt", id("f690ed433e508ab4bdde8410e874defc")),
        ("nl", id("636b937d4bbe80e698273c7a6a0fb5a6")),
        ("ja", id("817e06bf856c81d3aa8194b65f089417")),
        ("zh", id("f4ea39a28ddc830ab0ad4f4b8fb654f4")),
        ("ko", id("576e002244fa8879be9263aee204ad60")),
        ("ru", id("050ad1126c7d822089efb5dd86fd8885")),
        ("ar", id("3c02452e65b7800cb586f4e357435f27")),
        ("hi", id("01923300ca69836b8538e0eb5b44088a")),
    ];

    /// Looks up the language entity for a BCP 47 code (case-insensitive).
    pub fn language_id(code: &str) -> Option<Id> {
        LANGUAGES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|(_, id)| *id)
    }

    /// Default language for names, descriptions, and updated text values.
    pub fn english() -> Id {
        LANGUAGES[0].1
    }

    pub fn german() -> Id {
        LANGUAGES[3].1
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::DataType;

    #[test]
    fn test_fixed_ids() {
        assert_eq!(properties::name().to_string(), "a126ca530c8e48d5b88882c734c38935");
        assert_eq!(types::property().to_string(), "808a04ceb21c4d888ad12e240613e5ca");
        assert_ne!(properties::name(), properties::description());
    }

    #[test]
    fn test_data_type_table() {
        assert_eq!(
            data_types::id_for(DataType::Boolean).to_string(),
            "fa6a11b06c6e895e86e7a950a31a8767"
        );
        assert_eq!(data_types::relation(), data_types::id_for(DataType::Relation));

        let all = [
            DataType::Boolean,
            DataType::Integer,
            DataType::Float,
            DataType::Decimal,
            DataType::Text,
            DataType::Bytes,
            DataType::Date,
            DataType::Time,
            DataType::Datetime,
            DataType::Schedule,
            DataType::Point,
            DataType::Embedding,
            DataType::Relation,
        ];
        let ids: HashSet<Id> = all.iter().map(|dt| data_types::id_for(*dt)).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_language_table() {
        assert_eq!(languages::english().to_string(), "090adac0fca4822e8e719263e67620ec");
        assert_eq!(languages::language_id("en"), Some(languages::english()));
        assert_eq!(languages::language_id("DE"), Some(languages::german()));
        assert_eq!(languages::language_id("xx"), None);

        let ids: HashSet<Id> = languages::LANGUAGES.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids.len(), languages::LANGUAGES.len());
    }
}

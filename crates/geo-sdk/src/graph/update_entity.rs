use tracing::debug;

use crate::error::ValidationError;
use crate::genesis::languages;
use crate::graph::CreateResult;
use crate::graph::create_entity::default_values;
use crate::model::{Id, Op, PropertyValueParam, UnsetLanguage, UnsetValue, UpdateEntity};
use crate::validate::{Scope, normalize_property_values};

/// Which language slot to clear when unsetting a property.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UnsetLanguageParam {
    /// Every language variant.
    #[default]
    All,
    /// A language id that is already validated, e.g. [`languages::english`].
    Resolved(Id),
    /// A language id string. `"all"` is read as [`UnsetLanguageParam::All`].
    Raw(String),
}

impl From<Id> for UnsetLanguageParam {
    fn from(language: Id) -> Self {
        UnsetLanguageParam::Resolved(language)
    }
}

impl From<&str> for UnsetLanguageParam {
    fn from(language: &str) -> Self {
        UnsetLanguageParam::Raw(language.to_string())
    }
}

impl From<String> for UnsetLanguageParam {
    fn from(language: String) -> Self {
        UnsetLanguageParam::Raw(language)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsetPropertyParam {
    pub property: String,
    pub language: UnsetLanguageParam,
}

impl UnsetPropertyParam {
    /// Clears every language slot of `property`.
    pub fn all(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            language: UnsetLanguageParam::All,
        }
    }

    pub fn language(property: impl Into<String>, language: impl Into<UnsetLanguageParam>) -> Self {
        Self {
            property: property.into(),
            language: language.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEntityParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub values: Vec<PropertyValueParam>,
    pub unset: Vec<UnsetPropertyParam>,
}

impl UpdateEntityParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Builds a single `UpdateEntity` op.
///
/// Name, description and text values without a language are set in
/// English. An update with nothing to set or unset still yields one op.
pub fn update_entity(params: UpdateEntityParams) -> Result<CreateResult, ValidationError> {
    let scope = Scope::new("updateEntity");
    let id = scope.id("id", &params.id)?;
    let explicit_values =
        normalize_property_values(&params.values, &scope, Some(languages::english()))?;

    let unset_scope = scope.within("unset");
    let unset = params
        .unset
        .iter()
        .map(|entry| {
            let property = unset_scope.id("property", &entry.property)?;
            let language = match &entry.language {
                UnsetLanguageParam::All => UnsetLanguage::All,
                UnsetLanguageParam::Raw(raw) if raw == "all" => UnsetLanguage::All,
                UnsetLanguageParam::Resolved(language) => UnsetLanguage::Specific(*language),
                UnsetLanguageParam::Raw(raw) => {
                    UnsetLanguage::Specific(unset_scope.id("language", raw)?)
                }
            };
            Ok(UnsetValue { property, language })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let mut set = default_values(params.name.as_deref(), params.description.as_deref());
    set.extend(explicit_values);

    debug!(entity = %id, set = set.len(), unset = unset.len(), "built update op");
    Ok(CreateResult {
        id,
        ops: vec![Op::UpdateEntity(UpdateEntity { id, set, unset })],
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsetEntityValuesParams {
    pub id: String,
    pub properties: Vec<String>,
}

/// Builds an `UpdateEntity` op that clears every language slot of each
/// listed property.
pub fn unset_entity_values(params: UnsetEntityValuesParams) -> Result<CreateResult, ValidationError> {
    let scope = Scope::new("unsetEntityValues");
    let id = scope.id("id", &params.id)?;
    let unset = scope
        .ids("properties", &params.properties)?
        .into_iter()
        .map(UnsetValue::all)
        .collect();

    let mut op = UpdateEntity::new(id);
    op.unset = unset;
    Ok(CreateResult {
        id,
        ops: vec![Op::UpdateEntity(op)],
    })
}

//! Role-to-model mapping.
//!
//! [`ModelRoster`] is a static value object: each [`AgentRole`] is served by
//! a [`ModelRoute`], a primary model plus an optional fallback that is
//! only tried after every retry on the primary is used up.

use super::roles::AgentRole;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Primary model with an optional fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRoute {
    pub primary: Model,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Model>,
}

impl ModelRoute {
    pub fn new(primary: Model) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Model) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Models in the order they are tried
    pub fn models(&self) -> Vec<&Model> {
        std::iter::once(&self.primary)
            .chain(self.fallback.as_ref())
            .collect()
    }
}

/// Role-based model configuration.
///
/// # Example
///
/// ```
/// use council_domain::{AgentRole, Model, ModelRoster, ModelRoute};
///
/// let roster = ModelRoster::default()
///     .with_route(AgentRole::Coach, ModelRoute::new(Model::Llama33_70bVersatile));
///
/// assert_eq!(roster.route(AgentRole::Coach).primary, Model::Llama33_70bVersatile);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRoster {
    pub facilitator: ModelRoute,
    pub coach: ModelRoute,
    pub tech: ModelRoute,
    pub biz: ModelRoute,
    pub data: ModelRoute,
    pub guard: ModelRoute,
}

impl Default for ModelRoster {
    fn default() -> Self {
        Self {
            facilitator: ModelRoute::new(Model::Llama31_8bInstant),
            coach: ModelRoute::new(Model::GroqCompound),
            tech: ModelRoute::new(Model::Llama31_8bInstant),
            biz: ModelRoute::new(Model::Llama33_70bVersatile),
            data: ModelRoute::new(Model::GptOss120b).with_fallback(Model::GptOss20b),
            guard: ModelRoute::new(Model::LlamaGuard4_12b),
        }
    }
}

impl ModelRoster {
    pub fn route(&self, role: AgentRole) -> &ModelRoute {
        match role {
            AgentRole::Facilitator => &self.facilitator,
            AgentRole::Coach => &self.coach,
            AgentRole::Tech => &self.tech,
            AgentRole::Biz => &self.biz,
            AgentRole::Data => &self.data,
            AgentRole::Guard => &self.guard,
        }
    }

    pub fn with_route(mut self, role: AgentRole, route: ModelRoute) -> Self {
        let slot = match role {
            AgentRole::Facilitator => &mut self.facilitator,
            AgentRole::Coach => &mut self.coach,
            AgentRole::Tech => &mut self.tech,
            AgentRole::Biz => &mut self.biz,
            AgentRole::Data => &mut self.data,
            AgentRole::Guard => &mut self.guard,
        };
        *slot = route;
        self
    }

    /// Every (role, route) pair, for display and validation
    pub fn entries(&self) -> Vec<(AgentRole, &ModelRoute)> {
        [
            AgentRole::Facilitator,
            AgentRole::Coach,
            AgentRole::Tech,
            AgentRole::Biz,
            AgentRole::Data,
            AgentRole::Guard,
        ]
        .into_iter()
        .map(|role| (role, self.route(role)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_route_has_fallback() {
        let roster = ModelRoster::default();
        let data = roster.route(AgentRole::Data);
        assert_eq!(data.models(), vec![&Model::GptOss120b, &Model::GptOss20b]);
        assert_eq!(roster.route(AgentRole::Tech).models().len(), 1);
    }

    #[test]
    fn test_with_route_replaces_only_that_role() {
        let roster = ModelRoster::default().with_route(
            AgentRole::Guard,
            ModelRoute::new(Model::Custom("guard-x".to_string())),
        );
        assert_eq!(
            roster.route(AgentRole::Guard).primary,
            Model::Custom("guard-x".to_string())
        );
        assert_eq!(roster.coach, ModelRoster::default().coach);
    }

    #[test]
    fn test_entries_cover_all_roles() {
        assert_eq!(ModelRoster::default().entries().len(), 6);
    }
}

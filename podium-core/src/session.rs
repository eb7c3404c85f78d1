//! Session-scoped ownership of the active [`RankingConfig`].
//!
//! A session is hydrated once from the shared query string and then mirrors
//! every explicit change back out through registered hooks, handing them the
//! freshly encoded parameters. There is no implicit tracking: only the
//! mutators below notify.

use crate::{Medal, QueryParams, RankingConfig, Weight, decode, encode};

/// Callback invoked after the configuration changes.
pub type ChangeHook = Box<dyn FnMut(&RankingConfig, &QueryParams) + Send>;

/// Current ranking configuration plus its change observers.
///
/// # Examples
/// ```
/// use std::sync::{Arc, Mutex};
/// use podium_core::{ConfigSession, Medal, QueryParams, RankingConfig, Weight};
///
/// let mut session = ConfigSession::hydrate(&QueryParams::parse("bronze=4"), RankingConfig::default());
/// let shared = Arc::new(Mutex::new(String::new()));
/// let sink = Arc::clone(&shared);
/// session.on_change(move |_, params| {
///     if let Ok(mut slot) = sink.lock() {
///         *slot = params.to_query_string();
///     }
/// });
///
/// session.set_weight(Medal::Gold, Weight::checked(6).expect("weight in range"));
/// assert_eq!(*shared.lock().expect("lock"), "gold=6&bronze=4");
/// ```
pub struct ConfigSession {
    config: RankingConfig,
    defaults: RankingConfig,
    hooks: Vec<ChangeHook>,
}

impl std::fmt::Debug for ConfigSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigSession")
            .field("config", &self.config)
            .field("defaults", &self.defaults)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl ConfigSession {
    /// Start a session from the persisted query parameters.
    ///
    /// Hydration never notifies hooks.
    #[must_use]
    pub fn hydrate(params: &QueryParams, defaults: RankingConfig) -> Self {
        Self {
            config: decode(params, &defaults),
            defaults,
            hooks: Vec::new(),
        }
    }

    /// Start a session at the defaults.
    #[must_use]
    pub const fn with_defaults(defaults: RankingConfig) -> Self {
        Self {
            config: defaults,
            defaults,
            hooks: Vec::new(),
        }
    }

    /// Borrow the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Borrow the defaults used for encoding and hydration.
    #[must_use]
    pub const fn defaults(&self) -> &RankingConfig {
        &self.defaults
    }

    /// Register a hook called after each effective change.
    pub fn on_change<F>(&mut self, hook: F)
    where
        F: FnMut(&RankingConfig, &QueryParams) + Send + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Encode the active configuration for sharing.
    #[must_use]
    pub fn share_params(&self) -> QueryParams {
        encode(&self.config, &self.defaults)
    }

    /// Change one medal weight.
    pub fn set_weight(&mut self, medal: Medal, weight: Weight) {
        self.update(|config| config.set_weight(medal, weight));
    }

    /// Toggle population normalisation.
    pub fn set_normalize_by_population(&mut self, enabled: bool) {
        self.update(|config| config.normalize_by_population = enabled);
    }

    /// Return every setting to its default.
    pub fn reset(&mut self) {
        let defaults = self.defaults;
        self.update(|config| *config = defaults);
    }

    /// Apply an arbitrary edit and notify hooks when it changed anything.
    ///
    /// Returns `true` when the configuration changed.
    pub fn update<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut RankingConfig),
    {
        let before = self.config;
        edit(&mut self.config);
        if self.config == before {
            return false;
        }
        let params = self.share_params();
        for hook in &mut self.hooks {
            hook(&self.config, &params);
        }
        true
    }
}

/*!
 * Online Permission Handler
 * Resolves permissions for connected principals only
 */

use crate::config::HandlerConfig;
use crate::core::errors::{ConfigError, PermissionResult};
use crate::permissions::audit::AuditLogger;
use crate::permissions::profile::PermissionProfile;
use crate::permissions::resolver::ResolutionEngine;
use crate::permissions::types::{CapabilitySet, PermissionHandler, Principal, TriStateLookup};
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Handler backed by the live tri-state lookup of each connected principal
///
/// Offline principals get no profile: there is no live backend to ask.
pub struct OnlinePermissionHandler<P: ?Sized> {
    capabilities: CapabilitySet,
    engine: ResolutionEngine,
    audit: Option<Arc<AuditLogger>>,
    _principal: PhantomData<fn(&P)>,
}

impl<P: TriStateLookup + ?Sized> OnlinePermissionHandler<P> {
    /// Validate the configuration and build from it
    ///
    /// Declared capabilities must match what this handler serves, so a
    /// configuration claiming offline support is rejected.
    pub fn new(config: &HandlerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &HandlerConfig) -> Self {
        let audit = config
            .audit
            .enabled
            .then(|| Arc::new(AuditLogger::with_config(&config.audit)));

        Self {
            capabilities: config.capabilities.clone(),
            engine: ResolutionEngine::with_precedence(config.precedence),
            audit,
            _principal: PhantomData,
        }
    }

    /// Load, validate and build from a JSON configuration file
    pub fn from_config_path(path: impl AsRef<Path>) -> PermissionResult<Self> {
        let config = HandlerConfig::from_path(path)?;
        Self::new(&config).map_err(Into::into)
    }

    pub fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }

    /// Audit trail, when enabled in the configuration
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_deref()
    }
}

impl<P: TriStateLookup + ?Sized> Default for OnlinePermissionHandler<P> {
    fn default() -> Self {
        Self::build(&HandlerConfig::default())
    }
}

impl<P: TriStateLookup + ?Sized> PermissionHandler for OnlinePermissionHandler<P> {
    type Principal = P;

    fn initialize(&self) {
        info!(
            capabilities = %self.capabilities,
            precedence = ?self.engine.precedence(),
            audit = self.audit.is_some(),
            "Online permission handler active"
        );
    }

    fn permission_profile(&self, principal: &Principal<P>) -> Option<PermissionProfile<P>> {
        match principal {
            Principal::Connected(reference) => Some(PermissionProfile::connected(
                reference.clone(),
                self.engine,
                self.audit.clone(),
            )),
            Principal::Console => Some(PermissionProfile::console()),
            Principal::Offline(id) => {
                debug!(principal = %id, "offline principal has no permission profile");
                None
            }
        }
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }
}

/*!
 * Handler Module
 */

mod online;
mod registry;

pub use online::OnlinePermissionHandler;
pub use registry::PrincipalRegistry;

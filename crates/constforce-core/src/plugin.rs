//! Registration entry points that connect the constant force to a host.
//!
//! A host loads the plugin by calling [`register_kernel_factories`] on each of its platforms and
//! [`register_serialization_proxies`] on its proxy registry.

use crate::core::forcefield::kernels::CALC_CONST_FORCE_KERNEL_NAME;
use crate::core::io::const_force_proxy::ConstForceProxy;
use crate::core::io::proxy::ProxyRegistry;
use crate::engine::platform::Platform;
use crate::platforms::reference::ReferenceConstForceKernelFactory;
use std::sync::Arc;
use tracing::debug;

/// Registers the constant force kernel factory on `platform` if the plugin has an
/// implementation for it. Returns whether a factory was registered.
pub fn register_kernel_factories(platform: &mut Platform) -> bool {
    if platform.name() != Platform::REFERENCE {
        debug!(
            platform = platform.name(),
            "No constant force kernels available for platform."
        );
        return false;
    }
    platform.register_kernel_factory(
        CALC_CONST_FORCE_KERNEL_NAME,
        Arc::new(ReferenceConstForceKernelFactory),
    );
    true
}

pub fn register_serialization_proxies(registry: &mut ProxyRegistry) {
    registry.register(Arc::new(ConstForceProxy));
}

/// Returns the reference platform with the plugin's kernels registered.
pub fn reference_platform() -> Platform {
    let mut platform = Platform::reference();
    register_kernel_factories(&mut platform);
    platform
}

/// Returns a proxy registry with the plugin's proxies registered.
pub fn proxy_registry() -> ProxyRegistry {
    let mut registry = ProxyRegistry::new();
    register_serialization_proxies(&mut registry);
    registry
}

use super::error::EngineError;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A kernel created by a [`KernelFactory`], holding a type-erased implementation.
///
/// Factories store the implementation behind the kernel's abstract interface (for example a
/// `Box<dyn CalcConstForceKernel>`); the force that requested the kernel recovers it with
/// [`into_inner`](Self::into_inner).
pub struct Kernel {
    name: String,
    implementation: Box<dyn Any>,
}

impl Kernel {
    pub fn new<T: Any>(name: &str, implementation: T) -> Self {
        Self {
            name: name.to_string(),
            implementation: Box::new(implementation),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extracts the implementation as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::KernelTypeMismatch`] if the kernel was built with a different type.
    pub fn into_inner<T: Any>(self) -> Result<T, EngineError> {
        let name = self.name;
        self.implementation
            .downcast::<T>()
            .map(|implementation| *implementation)
            .map_err(|_| EngineError::KernelTypeMismatch { name })
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel").field("name", &self.name).finish()
    }
}

/// Creates kernels for a platform by name.
pub trait KernelFactory: Send + Sync {
    fn create_kernel(&self, name: &str, platform: &Platform) -> Result<Kernel, EngineError>;
}

/// An execution backend together with the kernel factories registered on it.
#[derive(Clone)]
pub struct Platform {
    name: String,
    factories: HashMap<String, Arc<dyn KernelFactory>>,
}

impl Platform {
    pub const REFERENCE: &'static str = "Reference";

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            factories: HashMap::new(),
        }
    }

    /// Creates the reference platform with no kernels registered.
    pub fn reference() -> Self {
        Self::new(Self::REFERENCE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers `factory` as the creator of kernels named `kernel_name`, replacing any
    /// factory previously registered under that name.
    pub fn register_kernel_factory(&mut self, kernel_name: &str, factory: Arc<dyn KernelFactory>) {
        self.factories.insert(kernel_name.to_string(), factory);
    }

    pub fn supports_kernel(&self, kernel_name: &str) -> bool {
        self.factories.contains_key(kernel_name)
    }

    pub fn create_kernel(&self, kernel_name: &str) -> Result<Kernel, EngineError> {
        let factory =
            self.factories
                .get(kernel_name)
                .ok_or_else(|| EngineError::KernelNotFound {
                    name: kernel_name.to_string(),
                    platform: self.name.clone(),
                })?;
        factory.create_kernel(kernel_name, self)
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kernels: Vec<_> = self.factories.keys().collect();
        kernels.sort();
        f.debug_struct("Platform")
            .field("name", &self.name)
            .field("kernels", &kernels)
            .finish()
    }
}

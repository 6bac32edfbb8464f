//! Operation name → {input shape, output shape, error codes}, plus the shapes, enums and
//! error descriptors those operations refer to.

use crate::domain::ports::{Shape, WireEnum};
use crate::domain::schema::{
    EnumDescriptor, ErrorDescriptor, FieldType, OperationDescriptor, ShapeDescriptor,
};
use crate::utils::error::{ModelError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    service: String,
    shapes: BTreeMap<String, Arc<ShapeDescriptor>>,
    enums: BTreeMap<String, Arc<EnumDescriptor>>,
    errors: BTreeMap<String, Arc<ErrorDescriptor>>,
    operations: BTreeMap<String, Arc<OperationDescriptor>>,
}

impl ModelRegistry {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Self::default()
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service
    }

    /// Registers a generated shape together with the enums its fields use.
    pub fn register_shape<S: Shape>(&mut self) -> Result<&mut Self> {
        let descriptor = S::describe()?;
        let enums: Vec<Arc<EnumDescriptor>> = descriptor
            .fields()
            .iter()
            .filter_map(|f| match f.field_type() {
                FieldType::Enum(e) => Some(Arc::clone(e)),
                _ => None,
            })
            .collect();
        for descriptor in enums {
            self.add_enum(unwrap_arc(descriptor))?;
        }
        self.add_shape(descriptor)?;
        Ok(self)
    }

    pub fn register_enum<E: WireEnum>(&mut self) -> Result<&mut Self> {
        self.add_enum(E::descriptor())?;
        Ok(self)
    }

    pub fn add_shape(&mut self, descriptor: ShapeDescriptor) -> Result<()> {
        if self.shapes.contains_key(descriptor.name()) {
            return Err(ModelError::schema(format!(
                "shape {} is already registered",
                descriptor.name()
            )));
        }
        tracing::trace!(shape = descriptor.name(), "registering shape");
        self.shapes
            .insert(descriptor.name().to_string(), Arc::new(descriptor));
        Ok(())
    }

    pub fn add_enum(&mut self, descriptor: EnumDescriptor) -> Result<()> {
        match self.enums.get(descriptor.name()) {
            Some(existing) if **existing == descriptor => Ok(()),
            Some(_) => Err(ModelError::schema(format!(
                "enum {} is already registered with different values",
                descriptor.name()
            ))),
            None => {
                self.enums
                    .insert(descriptor.name().to_string(), Arc::new(descriptor));
                Ok(())
            }
        }
    }

    pub fn add_error(&mut self, descriptor: ErrorDescriptor) -> Result<()> {
        if self.errors.contains_key(descriptor.code()) {
            return Err(ModelError::schema(format!(
                "error code {} is already registered",
                descriptor.code()
            )));
        }
        self.errors
            .insert(descriptor.code().to_string(), Arc::new(descriptor));
        Ok(())
    }

    pub fn add_operation(&mut self, descriptor: OperationDescriptor) -> Result<()> {
        if self.operations.contains_key(descriptor.name()) {
            return Err(ModelError::schema(format!(
                "operation {} is already registered",
                descriptor.name()
            )));
        }
        self.operations
            .insert(descriptor.name().to_string(), Arc::new(descriptor));
        Ok(())
    }

    pub fn shape(&self, name: &str) -> Result<&ShapeDescriptor> {
        self.shapes
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| ModelError::UnknownShape(name.to_string()))
    }

    pub fn operation(&self, name: &str) -> Result<&OperationDescriptor> {
        self.operations
            .get(name)
            .map(|o| o.as_ref())
            .ok_or_else(|| ModelError::UnknownOperation(name.to_string()))
    }

    pub fn error(&self, code: &str) -> Option<&ErrorDescriptor> {
        self.errors.get(code).map(|e| e.as_ref())
    }

    pub fn enum_type(&self, name: &str) -> Option<&Arc<EnumDescriptor>> {
        self.enums.get(name)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeDescriptor> {
        self.shapes.values().map(|s| s.as_ref())
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumDescriptor> {
        self.enums.values().map(|e| e.as_ref())
    }

    pub fn errors(&self) -> impl Iterator<Item = &ErrorDescriptor> {
        self.errors.values().map(|e| e.as_ref())
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values().map(|o| o.as_ref())
    }

    /// Adds every definition of `other`; a name defined on both sides is an error.
    /// On error `self` is left as it was.
    pub fn merge(&mut self, other: ModelRegistry) -> Result<()> {
        let mut merged = self.clone();
        for descriptor in other.enums.into_values() {
            merged.add_enum(unwrap_arc(descriptor))?;
        }
        for descriptor in other.shapes.into_values() {
            merged.add_shape(unwrap_arc(descriptor))?;
        }
        for descriptor in other.errors.into_values() {
            merged.add_error(unwrap_arc(descriptor))?;
        }
        for descriptor in other.operations.into_values() {
            merged.add_operation(unwrap_arc(descriptor))?;
        }
        *self = merged;
        Ok(())
    }

    /// Checks that every referenced shape and error code is defined.
    pub fn validate(&self) -> Result<()> {
        for shape in self.shapes.values() {
            for field in shape.fields() {
                for referenced in field.field_type().referenced_shapes() {
                    if !self.shapes.contains_key(referenced) {
                        return Err(ModelError::schema(format!(
                            "{}.{} refers to undefined shape {}",
                            shape.name(),
                            field.local_name(),
                            referenced
                        )));
                    }
                }
            }
        }

        for operation in self.operations.values() {
            for shape in [operation.input(), operation.output()] {
                if !self.shapes.contains_key(shape) {
                    return Err(ModelError::schema(format!(
                        "operation {} refers to undefined shape {}",
                        operation.name(),
                        shape
                    )));
                }
            }
            for code in operation.errors() {
                if !self.errors.contains_key(code) {
                    return Err(ModelError::schema(format!(
                        "operation {} declares undefined error {}",
                        operation.name(),
                        code
                    )));
                }
            }
        }

        Ok(())
    }
}

fn unwrap_arc<T: Clone>(value: Arc<T>) -> T {
    Arc::try_unwrap(value).unwrap_or_else(|shared| (*shared).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::FieldDescriptor;

    fn tag_shape() -> ShapeDescriptor {
        ShapeDescriptor::builder("Tag")
            .field(FieldDescriptor::new("key", "Key", FieldType::String))
            .field(FieldDescriptor::new("value", "Value", FieldType::String))
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_unknown_names() {
        let registry = ModelRegistry::new("SSM");
        assert!(matches!(
            registry.operation("Nope"),
            Err(ModelError::UnknownOperation(_))
        ));
        assert!(matches!(registry.shape("Nope"), Err(ModelError::UnknownShape(_))));
        assert!(registry.error("Nope").is_none());
    }

    #[test]
    fn test_validate_detects_dangling_references() {
        let mut registry = ModelRegistry::new("SSM");
        registry.add_shape(tag_shape()).unwrap();
        registry
            .add_operation(OperationDescriptor::new("AddTags", "Tag", "Missing"))
            .unwrap();
        assert!(registry.validate().is_err());

        let mut registry = ModelRegistry::new("SSM");
        registry.add_shape(tag_shape()).unwrap();
        registry
            .add_operation(OperationDescriptor::new("AddTags", "Tag", "Tag").with_errors(["Boom"]))
            .unwrap();
        assert!(registry.validate().is_err());

        registry.add_error(ErrorDescriptor::new("Boom")).unwrap();
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ModelRegistry::new("SSM");
        registry.add_shape(tag_shape()).unwrap();
        assert!(registry.add_shape(tag_shape()).is_err());

        let mut other = ModelRegistry::new("SSM");
        other.add_shape(tag_shape()).unwrap();
        assert!(registry.merge(other).is_err());
    }

    #[test]
    fn test_failed_merge_leaves_registry_unchanged() {
        let mut registry = ModelRegistry::new("SSM");
        registry.add_shape(tag_shape()).unwrap();

        // Error codes are merged after shapes, so the clash comes late
        registry.add_error(ErrorDescriptor::new("Boom")).unwrap();
        let mut other = ModelRegistry::new("SSM");
        other
            .add_shape(ShapeDescriptor::builder("Label").build().unwrap())
            .unwrap();
        other.add_error(ErrorDescriptor::new("Boom")).unwrap();

        assert!(registry.merge(other).is_err());
        assert!(registry.shape("Label").is_err());
        assert_eq!(registry.shapes().count(), 1);
    }

    #[test]
    fn test_conflicting_field_enum_rejected() {
        use crate::model::InstanceInformation;

        let mut registry = ModelRegistry::new("SSM");
        registry
            .add_enum(EnumDescriptor::new("PingStatus", ["Online"]))
            .unwrap();

        let err = registry.register_shape::<InstanceInformation>().unwrap_err();
        assert!(matches!(err, ModelError::SchemaError { .. }));
        assert!(registry.shape("InstanceInformation").is_err());
        assert_eq!(
            registry.enum_type("PingStatus").map(|e| e.values().len()),
            Some(1)
        );
    }
}

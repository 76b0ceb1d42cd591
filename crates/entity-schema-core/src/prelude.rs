// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_schema_core::prelude::*;
//! ```

pub use crate::{
    BaseEntity, ClassDeclaration, ClassRegistry, ClassSchema, EntityClass, EntityMethods,
    EntityType, GetterMap, MethodDeclaration, MethodHandle, PropertyDescriptor, ROOT_ENTITY,
    Reflection, ReflectionError, Reflector, SchemaConfig
};

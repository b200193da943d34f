//! Converter registry and resolver.
//!
//! Entries are declared once through a [`RegistryBuilder`] and frozen into a
//! [`ConverterRegistry`]. Lookup keys on the Ignition type name and keeps
//! declaration order among entries sharing it, so the first declared entry
//! wins when the ROS 1 name is left unspecified.

use std::collections::HashMap;

use tracing::debug;

use crate::Builder;
use crate::error::{BridgeError, Result};
use crate::factory::{ConverterHandle, TypedConverter};
use crate::msg::{BridgePair, IgnMessage};

/// ROS 1 type name that matches any entry with the requested Ignition type.
pub const WILDCARD: &str = "";

/// One registered conversion pair.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    ros1_type: &'static str,
    ign_type: &'static str,
    constructor: fn() -> ConverterHandle,
}

impl RegistryEntry {
    pub fn new<R, I>() -> Self
    where
        R: BridgePair<I>,
        I: IgnMessage,
    {
        Self {
            ros1_type: R::TYPE_NAME,
            ign_type: I::TYPE_NAME,
            constructor: TypedConverter::<R, I>::handle,
        }
    }

    pub fn ros1_type(&self) -> &'static str {
        self.ros1_type
    }

    pub fn ign_type(&self) -> &'static str {
        self.ign_type
    }

    /// Whether this entry answers a `(ros1_type, ign_type)` query.
    pub fn matches(&self, ros1_type: &str, ign_type: &str) -> bool {
        self.ign_type == ign_type && (ros1_type == WILDCARD || self.ros1_type == ros1_type)
    }

    /// Construct a fresh converter for this pair.
    pub fn create(&self) -> ConverterHandle {
        (self.constructor)()
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("ros1_type", &self.ros1_type)
            .field("ign_type", &self.ign_type)
            .finish()
    }
}

/// Collects registrations; nothing is validated until [`Builder::build`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
    errors: Vec<BridgeError>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the pair under the names of its bound types.
    pub fn register<R, I>(mut self) -> Self
    where
        R: BridgePair<I>,
        I: IgnMessage,
    {
        self.entries.push(RegistryEntry::new::<R, I>());
        self
    }

    /// Register the pair under explicit names.
    ///
    /// The names must equal the bound types' names, otherwise
    /// [`build`](Builder::build) fails with [`BridgeError::MismatchedBinding`].
    pub fn register_as<R, I>(mut self, ros1_type: &str, ign_type: &str) -> Self
    where
        R: BridgePair<I>,
        I: IgnMessage,
    {
        if ros1_type != R::TYPE_NAME || ign_type != I::TYPE_NAME {
            self.errors.push(BridgeError::MismatchedBinding {
                requested_ros1: ros1_type.to_string(),
                requested_ign: ign_type.to_string(),
                bound_ros1: R::TYPE_NAME,
                bound_ign: I::TYPE_NAME,
            });
            return self;
        }
        self.register::<R, I>()
    }

    /// Append every entry of `other` after the entries declared so far.
    pub fn extend(mut self, other: RegistryBuilder) -> Self {
        self.entries.extend(other.entries);
        self.errors.extend(other.errors);
        self
    }
}

impl Builder for RegistryBuilder {
    type Output = ConverterRegistry;

    fn build(self) -> Result<ConverterRegistry> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }

        let mut by_ign: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            let slot = by_ign.entry(entry.ign_type).or_default();
            if let Some(&prev) = slot
                .iter()
                .find(|&&prev| self.entries[prev].ros1_type == entry.ros1_type)
            {
                debug!(
                    "[REG] Duplicate pair ({}, {}) at entries {} and {}",
                    entry.ros1_type, entry.ign_type, prev, idx
                );
                return Err(BridgeError::DuplicatePair {
                    ros1_type: entry.ros1_type,
                    ign_type: entry.ign_type,
                });
            }
            slot.push(idx);
        }

        for (ign_type, indices) in &by_ign {
            if indices.len() > 1 {
                debug!(
                    "[REG] Wildcard lookups for {} resolve to {}, shadowing {} other entr(ies)",
                    ign_type,
                    self.entries[indices[0]].ros1_type,
                    indices.len() - 1
                );
            }
        }

        debug!("[REG] Registry ready: {} pair(s)", self.entries.len());
        Ok(ConverterRegistry {
            entries: self.entries,
            by_ign,
        })
    }
}

/// Immutable set of conversion pairs.
#[derive(Debug)]
pub struct ConverterRegistry {
    entries: Vec<RegistryEntry>,
    by_ign: HashMap<&'static str, Vec<usize>>,
}

impl ConverterRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// First entry, in declaration order, answering the query.
    pub fn lookup(&self, ros1_type: &str, ign_type: &str) -> Option<&RegistryEntry> {
        self.by_ign
            .get(ign_type)?
            .iter()
            .map(|&idx| &self.entries[idx])
            .find(|entry| entry.matches(ros1_type, ign_type))
    }

    /// Resolve a converter for the pair.
    ///
    /// An empty `ros1_type` ([`WILDCARD`]) selects the first entry registered
    /// for `ign_type`. The returned converter reports the entry's names.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve(&self, ros1_type: &str, ign_type: &str) -> Result<ConverterHandle> {
        match self.lookup(ros1_type, ign_type) {
            Some(entry) => {
                debug!("[REG] Resolved {} <-> {}", entry.ros1_type, entry.ign_type);
                Ok(entry.create())
            }
            None => {
                debug!("[REG] No conversion registered");
                Err(BridgeError::UnrecognizedPair {
                    ros1_type: ros1_type.to_string(),
                    ign_type: ign_type.to_string(),
                })
            }
        }
    }

    /// Whether the query would resolve.
    pub fn contains(&self, ros1_type: &str, ign_type: &str) -> bool {
        self.lookup(ros1_type, ign_type).is_some()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ign_msg;
    use crate::ros1_msg::geometry_msgs::{Quaternion, Vector3};
    use crate::ros1_msg::std_msgs::{Header, RosString};

    fn registry() -> ConverterRegistry {
        ConverterRegistry::builder()
            .register::<Header, ign_msg::Header>()
            .register::<RosString, ign_msg::StringMsg>()
            .register::<Quaternion, ign_msg::Quaternion>()
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_exact_and_wildcard() {
        let reg = registry();
        assert_eq!(reg.len(), 3);
        assert!(reg.contains("std_msgs/Header", "ignition.msgs.Header"));
        assert!(reg.contains(WILDCARD, "ignition.msgs.Quaternion"));
        assert!(!reg.contains("std_msgs/Header", "ignition.msgs.StringMsg"));
        assert!(!reg.contains("geometry_msgs/Vector3", "ignition.msgs.Vector3d"));
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let reg = registry();
        let names: Vec<_> = reg.entries().iter().map(RegistryEntry::ros1_type).collect();
        assert_eq!(
            names,
            ["std_msgs/Header", "std_msgs/String", "geometry_msgs/Quaternion"]
        );
    }

    #[test]
    fn test_resolve_unknown_pair() {
        let err = registry()
            .resolve("geometry_msgs/Vector3", "ignition.msgs.Vector3d")
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::UnrecognizedPair { ref ros1_type, .. } if ros1_type == "geometry_msgs/Vector3"
        ));
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let err = ConverterRegistry::builder()
            .register::<Vector3, ign_msg::Vector3d>()
            .register::<Header, ign_msg::Header>()
            .register::<Vector3, ign_msg::Vector3d>()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::DuplicatePair {
                ros1_type: "geometry_msgs/Vector3",
                ign_type: "ignition.msgs.Vector3d"
            }
        ));
    }

    #[test]
    fn test_register_as_checks_names() {
        let reg = ConverterRegistry::builder()
            .register_as::<Header, ign_msg::Header>("std_msgs/Header", "ignition.msgs.Header")
            .build()
            .unwrap();
        assert_eq!(reg.len(), 1);

        let err = ConverterRegistry::builder()
            .register_as::<Header, ign_msg::Header>("std_msgs/Header", "ignition.msgs.Fluid")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::MismatchedBinding { bound_ign: "ignition.msgs.Header", .. }
        ));
    }

    #[test]
    fn test_empty_registry() {
        let reg = ConverterRegistry::builder().build().unwrap();
        assert!(reg.is_empty());
        assert!(reg.resolve(WILDCARD, "ignition.msgs.Header").is_err());
    }
}

//! Shading material sets
//!
//! Material programs are owned by the engine. A scene only keeps the set of
//! handles produced by the host's material factory and looks variants up by name:
//! `ground_<algorithm>` for terrain and `illum_<algorithm>` for everything else.

use std::collections::HashMap;

/// Material ID for referencing materials
pub type MaterialId = String;

/// Opaque reference to an engine shader program
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialHandle {
    pub id: u64,
    pub name: MaterialId,
}

impl MaterialHandle {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Which family of shader a mesh needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialVariant {
    /// Heightmap-displaced terrain
    Ground,
    /// Regular lit models
    Illumination,
}

impl MaterialVariant {
    pub const ALL: [MaterialVariant; 2] = [MaterialVariant::Ground, MaterialVariant::Illumination];

    pub fn prefix(self) -> &'static str {
        match self {
            MaterialVariant::Ground => "ground",
            MaterialVariant::Illumination => "illum",
        }
    }

    /// Material name for this variant under the given shading algorithm
    pub fn material_name(self, algorithm: &str) -> MaterialId {
        format!("{}_{}", self.prefix(), algorithm)
    }
}

/// Named material handles for one scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialSet {
    materials: HashMap<MaterialId, MaterialHandle>,
}

impl MaterialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material under its own name, replacing any previous entry
    pub fn insert(&mut self, material: MaterialHandle) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get(&self, name: &str) -> Option<&MaterialHandle> {
        self.materials.get(name)
    }

    pub fn resolve(&self, variant: MaterialVariant, algorithm: &str) -> Option<&MaterialHandle> {
        self.get(&variant.material_name(algorithm))
    }

    /// Name of the first variant missing for `algorithm`, if any
    pub fn missing_variant(&self, algorithm: &str) -> Option<MaterialId> {
        MaterialVariant::ALL
            .iter()
            .map(|variant| variant.material_name(algorithm))
            .find(|name| !self.materials.contains_key(name))
    }
}

impl FromIterator<MaterialHandle> for MaterialSet {
    fn from_iter<I: IntoIterator<Item = MaterialHandle>>(iter: I) -> Self {
        let mut set = MaterialSet::new();
        for material in iter {
            set.insert(material);
        }
        set
    }
}

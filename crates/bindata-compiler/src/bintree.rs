//! Hierarchical name index over assets, used for directory listings.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::Write as _;

use crate::asset::Asset;
use crate::error::{CompileError, Result};

/// One path segment of the asset namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bintree {
    /// An asset, identified by its generated identifier
    Leaf(String),
    /// A directory; children sorted by segment
    Dir(BTreeMap<String, Bintree>),
}

impl Default for Bintree {
    fn default() -> Self {
        Bintree::Dir(BTreeMap::new())
    }
}

impl Bintree {
    /// Build the tree rooted at the `""` path from resolved assets.
    pub fn build(assets: &[Asset]) -> Result<Self> {
        let mut root = Bintree::default();
        for asset in assets {
            root.insert(asset)?;
        }
        Ok(root)
    }

    fn insert(&mut self, asset: &Asset) -> Result<()> {
        let segments: Vec<&str> = asset.name.split('/').collect();
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| CompileError::invalid_path(&asset.name, "empty name"))?;

        let mut node = self;
        for segment in parents {
            let Bintree::Dir(children) = node else {
                return Err(CompileError::invalid_path(
                    &asset.name,
                    "a parent path is already an asset",
                ));
            };
            node = children.entry((*segment).to_string()).or_default();
        }

        let Bintree::Dir(children) = node else {
            return Err(CompileError::invalid_path(
                &asset.name,
                "a parent path is already an asset",
            ));
        };

        match children.entry((*last).to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(Bintree::Leaf(asset.func.clone()));
                Ok(())
            }
            Entry::Occupied(_) => Err(CompileError::invalid_path(
                &asset.name,
                "path is already used as a directory or asset",
            )),
        }
    }

    /// Immediate children of the directory `name` (`""` is the root).
    pub fn list(&self, name: &str) -> Result<Vec<&str>> {
        let mut node = self;
        if !name.is_empty() {
            let canonical = name.replace('\\', "/");
            for segment in canonical.split('/') {
                node = match node {
                    Bintree::Dir(children) => children
                        .get(segment)
                        .ok_or_else(|| CompileError::NotFound(name.to_string()))?,
                    Bintree::Leaf(_) => return Err(CompileError::NotFound(name.to_string())),
                };
            }
        }

        match node {
            Bintree::Dir(children) => Ok(children.keys().map(String::as_str).collect()),
            Bintree::Leaf(_) => Err(CompileError::NotFound(name.to_string())),
        }
    }

    /// Render the tree as a `GzipBintree` constant expression.
    ///
    /// `accessor` maps a leaf identifier to the path of its accessor function.
    pub fn write_rust(
        &self,
        out: &mut String,
        accessor: &dyn Fn(&str) -> String,
        indent: usize,
    ) -> Result<()> {
        match self {
            Bintree::Leaf(func) => {
                write!(out, "GzipBintree::Leaf({} as GzipAssetFn)", accessor(func))?;
            }
            Bintree::Dir(children) if children.is_empty() => {
                out.push_str("GzipBintree::Dir(&[])");
            }
            Bintree::Dir(children) => {
                out.push_str("GzipBintree::Dir(&[\n");
                for (segment, child) in children {
                    write_indent(out, indent + 1);
                    write!(out, "({:?}, ", segment)?;
                    child.write_rust(out, accessor, indent + 1)?;
                    out.push_str("),\n");
                }
                write_indent(out, indent);
                out.push_str("])");
            }
        }
        Ok(())
    }
}

fn write_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("    ");
    }
}

//! Boundary contracts for the connectome-archive collaborators
//!
//! The surface pipeline sits next to three file-shuffling components that
//! live outside this crate: an archive extractor that streams attachments to
//! disk verbatim, and two volume slice exporters (labeled and plain
//! intensity). None of them transform data, so only their exchanged types
//! and contracts are defined here; container parsing, lookup-table file
//! parsing, and image encoding are left to the implementations.

use crate::float_types::Real;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Attachment groups a connectome archive bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Metadata,
    Network,
    Volume,
    Track,
    Surface,
    Data,
}

/// One named attachment inside an archive: its modality and the relative
/// path it was stored under, which extraction preserves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub modality: Modality,
    pub relative_path: PathBuf,
}

/// Streams archive attachments to a destination directory unmodified.
///
/// `extract` writes one attachment's payload to
/// `output_dir.join(&attachment.relative_path)`, bytes in, bytes out, with no
/// validation beyond the attachment existing in the archive.
pub trait ArchiveExtractor {
    /// Enumerate the archive's attachments, grouped by modality in the
    /// archive's own order.
    fn attachments(&self) -> io::Result<Vec<Attachment>>;

    /// Copy one attachment's payload verbatim under `output_dir`.
    fn extract(&self, attachment: &Attachment, output_dir: &Path) -> io::Result<()>;

    /// Copy every attachment, in enumeration order.
    fn extract_all(&self, output_dir: &Path) -> io::Result<()> {
        for attachment in self.attachments()? {
            self.extract(&attachment, output_dir)?;
        }
        Ok(())
    }
}

/// The three principal slicing axes of a volume, with the directory and file
/// naming the exporters use. Axis indices follow the scanner convention:
/// sagital slices walk axis 0, coronal axis 1, axial axis 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceAxis {
    Sagital,
    Coronal,
    Axial,
}

impl SliceAxis {
    /// Every axis family, in export order.
    pub const ALL: [SliceAxis; 3] = [SliceAxis::Sagital, SliceAxis::Coronal, SliceAxis::Axial];

    /// The volume axis this family walks.
    pub const fn volume_axis(self) -> usize {
        match self {
            SliceAxis::Sagital => 0,
            SliceAxis::Coronal => 1,
            SliceAxis::Axial => 2,
        }
    }

    /// Name of the per-axis output subdirectory.
    pub const fn dir_name(self) -> &'static str {
        match self {
            SliceAxis::Sagital => "sagital",
            SliceAxis::Coronal => "coronal",
            SliceAxis::Axial => "axial",
        }
    }

    /// File stem of one slice image, e.g. `axial_12`.
    pub fn slice_file_stem(self, index: usize) -> String {
        format!("{}_{}", self.dir_name(), index)
    }
}

/// A 3D volume of integer region labels, row-major over `dims`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVolume {
    pub dims: [usize; 3],
    pub labels: Vec<i32>,
}

/// A 3D volume of raw scalar intensities, row-major over `dims`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityVolume {
    pub dims: [usize; 3],
    pub values: Vec<Real>,
}

/// Region-id to display-color table, built from `[id, R, G, B]` rows.
/// Ids absent from the table map to the zero color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    rows: HashMap<i32, [u8; 3]>,
}

impl ColorTable {
    pub fn from_rows(rows: &[[i32; 4]]) -> Self {
        let rows = rows
            .iter()
            .map(|&[id, r, g, b]| (id, [r as u8, g as u8, b as u8]))
            .collect();
        ColorTable { rows }
    }

    /// RGB color for a region id; unknown ids yield black.
    pub fn color(&self, id: i32) -> [u8; 3] {
        self.rows.get(&id).copied().unwrap_or([0, 0, 0])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rasterizes every slice of a label volume through a [`ColorTable`], one
/// image per slice, into per-axis subdirectories named by
/// [`SliceAxis::dir_name`].
pub trait LabelSliceExporter {
    fn export_slices(
        &self,
        volume: &LabelVolume,
        table: &ColorTable,
        output_dir: &Path,
    ) -> io::Result<()>;
}

/// Same slicing and export layout as [`LabelSliceExporter`], but converts raw
/// scalar intensities directly to RGB with no lookup table.
pub trait IntensitySliceExporter {
    fn export_slices(&self, volume: &IntensityVolume, output_dir: &Path) -> io::Result<()>;
}

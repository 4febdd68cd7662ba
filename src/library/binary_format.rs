use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, ensure};
use memmap2::{Mmap, MmapOptions};

use crate::api::{CrossSectionTable, LibraryIndex};
use crate::error::{Result, XsError};
use crate::utils::parse_group_key;

//=====================================================================
// The "XSL" binary cross section library format.
//
// A library is a two-level hierarchy: one group per element (named
// by the decimal Z), and inside it one table per reaction (named by
// the decimal MT), each holding paired energy / xs arrays. The file
// is memory-mapped and only the tables that are asked for are copied
// out of it.
//=====================================================================

// The format as follows (from start of file to end), all integers are
// u64 and all floats f64, written in native byte order:
//    - Header section
//        - 8 bytes of magic, b"ATOMXSL\0"
//        - Format version
//        - Number of element groups
//    - Directory, for each group:
//        - Group name (decimal Z), ASCII padded to 16 bytes with whitespace
//        - Number of tables in the group
//        - For each table:
//            - Table name (decimal MT), ASCII padded to 16 bytes with whitespace
//            - Offset of the table, in f64 words from the start of the data section
//            - Number of points in the table
//    - Data section
//        - For each table, the energy values followed by the xs values
//
// The order of the tables in a group is the group's MT listing.

pub const MAGIC: &[u8; 8] = b"ATOMXSL\0";
pub const VERSION: u64 = 1;
pub const NAME_LENGTH: usize = 16;
const WORD: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    pub mt: usize,
    pub offset: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry {
    pub z: usize,
    pub tables: Vec<TableEntry>,
}

impl GroupEntry {
    pub fn table(&self, mt: usize) -> Option<&TableEntry> {
        self.tables.iter().find(|table| table.mt == mt)
    }

    // MTs in directory order (ascending, as the writer sorts them). XSL
    // keeps no separate MT dataset per element: the directory is the listing.
    pub fn mt_list(&self) -> Vec<usize> {
        self.tables.iter().map(|table| table.mt).collect()
    }
}

//=====================================================================
// Memory-mapped, read-only view of an XSL library. The map (and the
// file handle) is released when this value is dropped.
//=====================================================================
pub struct LibraryMmap {
    path: PathBuf,
    mmap: Mmap,
    groups: Vec<GroupEntry>,
    data_start: usize,
}

impl LibraryMmap {
    // Map an existing library into memory and read its directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| XsError::store_unavailable(&path, e))?;

        // SAFETY: the map is read-only and libraries are not modified while in use
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .map_err(|e| XsError::store_unavailable(&path, format!("failed to memory map: {}", e)))?;

        let (groups, data_start) =
            read_directory(&mmap).map_err(|reason| XsError::store_unavailable(&path, reason))?;

        tracing::debug!(path = %path.display(), groups = groups.len(), "opened XSL library");
        Ok(Self { path, mmap, groups, data_start })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn groups(&self) -> &[GroupEntry] {
        &self.groups
    }

    pub fn group(&self, z: usize) -> Option<&GroupEntry> {
        self.groups.iter().find(|group| group.z == z)
    }

    // Copy one table's energy and xs arrays out of the data section
    pub fn read_table(&self, table: &TableEntry) -> Result<(Vec<f64>, Vec<f64>)> {
        let corrupt = || {
            XsError::store_unavailable(
                &self.path,
                format!("table MT={} runs past the end of the data section", table.mt),
            )
        };
        let start = table
            .offset
            .checked_mul(WORD)
            .and_then(|bytes| bytes.checked_add(self.data_start))
            .ok_or_else(corrupt)?;
        let span = table.length.checked_mul(WORD).ok_or_else(corrupt)?;
        let end = start
            .checked_add(span)
            .and_then(|mid| mid.checked_add(span))
            .ok_or_else(corrupt)?;
        if end > self.mmap.len() {
            return Err(corrupt());
        }

        let energy = words_to_f64(&self.mmap[start..start + span]);
        let xs = words_to_f64(&self.mmap[start + span..end]);
        Ok((energy, xs))
    }

    pub fn get_xs(&self, z_list: &[usize], mt_list: &[usize]) -> Result<LibraryIndex> {
        let mut data = LibraryIndex::new();
        for &z in z_list {
            // Skip missing elements
            let Some(group) = self.group(z) else { continue };
            let tables = data.entry(z).or_default();
            for &mt in mt_list {
                // Skip missing reactions
                let Some(entry) = group.table(mt) else { continue };
                let (energy, xs) = self.read_table(entry)?;
                let table = CrossSectionTable::new(z, mt, energy, xs)
                    .map_err(|e| XsError::store_unavailable(&self.path, e))?;
                tables.insert(mt, table);
            }
        }
        Ok(data)
    }

    pub fn get_MT(&self, z_list: &[usize]) -> BTreeMap<usize, Vec<usize>> {
        z_list
            .iter()
            .filter_map(|&z| self.group(z).map(|group| (z, group.mt_list())))
            .collect()
    }
}

fn words_to_f64(bytes: &[u8]) -> Vec<f64> {
    bytes
        .chunks_exact(WORD)
        .map(|chunk| {
            let mut word = [0u8; WORD];
            word.copy_from_slice(chunk);
            f64::from_ne_bytes(word)
        })
        .collect()
}

// Sequential reader over the header and directory bytes
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> std::result::Result<&'a [u8], String> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| format!("unexpected end of file at byte {}", self.pos))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u64(&mut self) -> std::result::Result<usize, String> {
        let mut word = [0u8; WORD];
        word.copy_from_slice(self.take(WORD)?);
        usize::try_from(u64::from_ne_bytes(word)).map_err(|e| e.to_string())
    }

    fn read_key(&mut self) -> std::result::Result<usize, String> {
        let raw = self.take(NAME_LENGTH)?;
        let name = std::str::from_utf8(raw).map_err(|_| "group name is not ASCII".to_string())?;
        parse_group_key(name).ok_or_else(|| format!("invalid group name '{}'", name.trim()))
    }
}

fn read_directory(bytes: &[u8]) -> std::result::Result<(Vec<GroupEntry>, usize), String> {
    let mut cursor = Cursor { bytes, pos: 0 };

    if cursor.take(MAGIC.len())? != MAGIC {
        return Err("not an XSL cross section library (bad magic)".to_string());
    }
    let version = cursor.read_u64()?;
    if version as u64 != VERSION {
        return Err(format!("unsupported XSL version {}", version));
    }

    let num_groups = cursor.read_u64()?;
    let mut groups = Vec::new();
    for _ in 0..num_groups {
        let z = cursor.read_key()?;
        let num_tables = cursor.read_u64()?;
        let mut tables = Vec::new();
        for _ in 0..num_tables {
            let mt = cursor.read_key()?;
            let offset = cursor.read_u64()?;
            let length = cursor.read_u64()?;
            tables.push(TableEntry { mt, offset, length });
        }
        groups.push(GroupEntry { z, tables });
    }
    Ok((groups, cursor.pos))
}

//=====================================================================
// Writer for XSL libraries. Tables are collected in memory and written
// out sorted by Z, then MT.
//=====================================================================
#[derive(Debug, Clone, Default)]
pub struct LibraryWriter {
    groups: BTreeMap<usize, BTreeMap<usize, (Vec<f64>, Vec<f64>)>>,
}

impl LibraryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, z: usize, mt: usize, energy: Vec<f64>, xs: Vec<f64>) -> anyhow::Result<&mut Self> {
        ensure!(
            energy.len() == xs.len(),
            "Z={} MT={}: energy ({}) and xs ({}) must be of the same length",
            z, mt, energy.len(), xs.len()
        );
        ensure!(energy.len() >= 2, "Z={} MT={}: at least 2 points are required", z, mt);
        self.groups.entry(z).or_default().insert(mt, (energy, xs));
        Ok(self)
    }

    pub fn add_cross_section(&mut self, table: &CrossSectionTable) -> &mut Self {
        self.groups
            .entry(table.z())
            .or_default()
            .insert(table.mt(), (table.energy().to_vec(), table.xs().to_vec()));
        self
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create XSL library {}", path.display()))?;
        let mut output = BufWriter::new(file);

        // Header
        output.write_all(MAGIC)?;
        output.write_all(&VERSION.to_ne_bytes())?;
        output.write_all(&(self.groups.len() as u64).to_ne_bytes())?;

        // Directory, offsets are counted in f64 words into the data section
        let mut offset: u64 = 0;
        for (z, tables) in &self.groups {
            write_name(&mut output, *z)?;
            output.write_all(&(tables.len() as u64).to_ne_bytes())?;
            for (mt, (energy, _)) in tables {
                write_name(&mut output, *mt)?;
                output.write_all(&offset.to_ne_bytes())?;
                output.write_all(&(energy.len() as u64).to_ne_bytes())?;
                offset += 2 * energy.len() as u64;
            }
        }

        // Data section
        for tables in self.groups.values() {
            for (energy, xs) in tables.values() {
                for value in energy.iter().chain(xs.iter()) {
                    output.write_all(&value.to_ne_bytes())?;
                }
            }
        }
        output
            .flush()
            .with_context(|| format!("Failed to write XSL library {}", path.display()))?;

        tracing::info!(path = %path.display(), groups = self.groups.len(), "wrote XSL library");
        Ok(())
    }
}

fn write_name<W: Write>(output: &mut W, key: usize) -> anyhow::Result<()> {
    let name = key.to_string();
    ensure!(name.len() <= NAME_LENGTH, "group name {} is longer than {} bytes", name, NAME_LENGTH);
    output.write_all(name.as_bytes())?;
    output.write_all(&vec![b' '; NAME_LENGTH - name.len()])?;
    Ok(())
}

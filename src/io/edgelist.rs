//! read and write edge list text files and the benchmark output layout
//!
//! The format is one edge per line, two whitespace separated integers `u v`.
//! Reading skips blank lines and lines starting with '#'; lines with a wrong
//! token count or non integer tokens are counted as bad and skipped, self
//! loop lines are dropped and duplicate lines collapse to one edge. Bad data
//! is a quality issue reported in [LoadReport], never a hard failure; only
//! io errors abort a load.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::graph::{Edge, EdgeSet, NodeId};
use crate::stages::{TpOutput, TvOutput};

/// TP stage file names
pub const TRAIN_POS_FILE: &str = "Train_pos.txt";
pub const TEST_POS_FILE: &str = "Test_pos.txt";
pub const TEST_NEG_FILE: &str = "Test_neg.txt";
/// TV stage file names
pub const TRAIN_NEG_FILE: &str = "Train_neg.txt";
pub const VAL_POS_FILE: &str = "Val_pos.txt";
pub const VAL_NEG_FILE: &str = "Val_neg.txt";

/// Statistics gathered while loading an edge list.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadReport {
    /// lines read, including skipped ones
    pub total_lines: usize,
    /// distinct node identifiers seen on well formed lines
    pub nb_nodes: usize,
    /// distinct undirected edges kept (self loops excluded)
    pub nb_edges: usize,
    /// lines carrying an edge u == v
    pub self_loops: usize,
    /// well formed lines repeating an already seen edge
    pub duplicate_edges: usize,
    /// lines with a wrong token count or non integer tokens
    pub bad_lines: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " ========== graph info (undirected) ==========")?;
        writeln!(f, " total lines read        : {}", self.total_lines)?;
        writeln!(f, " nodes                   : {}", self.nb_nodes)?;
        writeln!(f, " edges (no self loops)   : {}", self.nb_edges)?;
        writeln!(f, " self loop lines         : {}", self.self_loops)?;
        writeln!(f, " duplicate edge lines    : {}", self.duplicate_edges)?;
        writeln!(f, " bad lines skipped       : {}", self.bad_lines)?;
        write!(f, " =============================================")
    }
} // end of impl Display for LoadReport

/// Loads an undirected edge list, returning the canonical edge set and the
/// per file statistics.
pub fn load_edges<P: AsRef<Path>>(path: P) -> Result<(EdgeSet, LoadReport)> {
    let path = path.as_ref();
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            log::error!("load_edges could not open file {:?}", path.as_os_str());
            return Err(e.into());
        }
    };
    let reader = BufReader::new(file);
    //
    let mut report = LoadReport::default();
    let mut edges = EdgeSet::default();
    let mut nodes = BTreeSet::<NodeId>::new();
    for line in reader.lines() {
        let line = line?;
        report.total_lines += 1;
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }
        let mut tokens = s.split_whitespace();
        let (u, v, rest) = (tokens.next(), tokens.next(), tokens.next());
        let (u, v) = match (u, v, rest) {
            (Some(u), Some(v), None) => (u, v),
            _ => {
                report.bad_lines += 1;
                continue;
            }
        };
        let (u, v) = match (u.parse::<NodeId>(), v.parse::<NodeId>()) {
            (Ok(u), Ok(v)) => (u, v),
            _ => {
                report.bad_lines += 1;
                continue;
            }
        };
        nodes.insert(u);
        nodes.insert(v);
        match Edge::canonical(u, v) {
            None => {
                report.self_loops += 1;
            }
            Some(edge) => {
                if !edges.insert(edge) {
                    report.duplicate_edges += 1;
                }
            }
        }
    }
    report.nb_nodes = nodes.len();
    report.nb_edges = edges.len();
    log::debug!("load_edges {:?} : {} edges kept", path.as_os_str(), edges.len());
    Ok((edges, report))
} // end of load_edges

/// Writes edges one per line as `u v`, creating parent directories as needed.
pub fn save_edges<P: AsRef<Path>>(path: P, edges: &[Edge]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for edge in edges {
        writeln!(writer, "{} {}", edge.0, edge.1)?;
    }
    writer.flush()?;
    Ok(())
} // end of save_edges

/// directory holding the TP stage products of a dataset
pub fn tp_dir<P: AsRef<Path>>(root: P, name: &str, seed: u64) -> PathBuf {
    root.as_ref().join(name).join(format!("TP_{}", seed))
}

/// directory holding the TV stage products, nested under the TP directory
pub fn tv_dir<P: AsRef<Path>>(tp_dir: P, seed: u64) -> PathBuf {
    tp_dir.as_ref().join(format!("TV_{}", seed))
}

/// Writes the three TP stage files into `dir`.
pub fn save_tp_output<P: AsRef<Path>>(dir: P, output: &TpOutput) -> Result<()> {
    let dir = dir.as_ref();
    save_edges(dir.join(TRAIN_POS_FILE), &output.train_pos)?;
    save_edges(dir.join(TEST_POS_FILE), &output.test_pos)?;
    save_edges(dir.join(TEST_NEG_FILE), &output.test_neg)?;
    log::info!("TP stage written to {:?}", dir.as_os_str());
    Ok(())
} // end of save_tp_output

/// Writes the four TV stage files into `dir`.
pub fn save_tv_output<P: AsRef<Path>>(dir: P, output: &TvOutput) -> Result<()> {
    let dir = dir.as_ref();
    save_edges(dir.join(TRAIN_POS_FILE), &output.t_pos)?;
    save_edges(dir.join(TRAIN_NEG_FILE), &output.train_neg)?;
    save_edges(dir.join(VAL_POS_FILE), &output.v_pos)?;
    save_edges(dir.join(VAL_NEG_FILE), &output.val_neg)?;
    log::info!("TV stage written to {:?}", dir.as_os_str());
    Ok(())
} // end of save_tv_output

//================================================================================================================

// end of mod tests

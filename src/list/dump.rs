//! Graphviz description of the node array.
//!
//! One record per slot, then three overlapping relations: the forward chain
//! (orange), the backward chain (purple) and the free chain (light green)
//! hanging off the `free` pointer. The output is write-only.
use super::{store::Node, List};
use crate::coredef::{
    error::Result,
    types::{Index, FREE_MARKER, SENTINEL},
};
use std::{fmt::Display, io::Write};

#[cfg(feature = "fs")]
use crate::coredef::error::{err, StatusCode};
#[cfg(feature = "fs")]
use crate::log;
#[cfg(feature = "fs")]
use std::{fs::File, io::BufWriter, path::Path, process::Command};

fn link(idx: Index) -> String {
    if idx == FREE_MARKER {
        "free".to_owned()
    } else {
        idx.to_string()
    }
}

impl<T> List<T> {
    /// Slots reached by following `step` from `start` up to the sentinel.
    /// Stops after `capacity` hops or at an index outside the array.
    fn walk(&self, start: Index, step: fn(&Node<T>) -> Index) -> Vec<Index> {
        let capacity = self.capacity();
        let mut chain = vec![];
        let mut idx = start;
        while idx != SENTINEL && idx < self.store.slots() && chain.len() < capacity {
            chain.push(idx);
            idx = step(self.store.node(idx));
        }
        chain
    }
}

impl<T: Display> List<T> {
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        self.preflight("dump")?;
        let capacity = self.capacity();

        writeln!(out, "digraph dump {{")?;
        writeln!(out, "\trankdir=TB;")?;
        write!(out, "\t{{\n\t\tnode[shape=plaintext];\n\t\tedge[color=white];\n\t\t\"cell 0 (sentinel)\"")?;
        for idx in 1..=capacity {
            write!(out, " -> \"cell {}\"", idx)?;
        }
        writeln!(out, ";\n\t}}")?;

        for view in self.slots() {
            let elem = match (view.index, view.elem) {
                (SENTINEL, _) => "sentinel".to_owned(),
                (_, Some(elem)) => elem.to_string(),
                (_, None) => "-".to_owned(),
            };
            writeln!(
                out,
                "\t{} [shape=record,label=\" elem {} | <next> next {} | <prev> prev {}\"];",
                view.index,
                elem,
                link(view.next),
                link(view.prev)
            )?;
        }
        writeln!(out, "\t{{ rank = same; \"cell 0 (sentinel)\"; 0; free; }}")?;
        for idx in 1..=capacity {
            writeln!(out, "\t{{ rank = same; \"cell {}\"; {}; }}", idx, idx)?;
        }

        write!(out, "\t{{\n\t\tedge[color=orange];\n\t\t0:<next> -> ")?;
        for idx in self.walk(self.head(), |node| node.next) {
            write!(out, "{}:<next> -> ", idx)?;
        }
        writeln!(out, "0:<next>;\n\t}}")?;

        write!(out, "\t{{\n\t\tedge[color=purple];\n\t\t0:<prev> -> ")?;
        for idx in self.walk(self.tail(), |node| node.prev) {
            write!(out, "{}:<prev> -> ", idx)?;
        }
        writeln!(out, "0:<prev>;\n\t}}")?;

        let free = self.free_head();
        if free != SENTINEL {
            write!(out, "\t{{\n\t\tedge[color=lightgreen];\n\t\t")?;
            for idx in self.walk(free, |node| node.next) {
                write!(out, "{}:<next> -> ", idx)?;
            }
            writeln!(out, "0:<next>;\n\t}}")?;
        }
        writeln!(out, "\t{{\n\t\tedge[color=darkgreen];\n\t\tfree -> {};\n\t}}", free)?;
        writeln!(out, "}}")?;
        Ok(())
    }

    /// Writes the description to `gv_path` and, when `image` is given, renders
    /// it to PNG with the external `dot` tool.
    #[cfg(feature = "fs")]
    pub fn dump_to_file(&self, gv_path: impl AsRef<Path>, image: Option<&Path>) -> Result<()> {
        let gv_path = gv_path.as_ref();
        let mut writer = BufWriter::new(File::create(gv_path)?);
        self.dump(&mut writer)?;
        writer.flush()?;

        let Some(image) = image else {
            return Ok(());
        };
        let status = Command::new("dot")
            .arg("-Tpng")
            .arg(gv_path)
            .arg("-o")
            .arg(image)
            .status()
            .map_err(|e| {
                log!(self.options.log, "Dump failed: cannot run dot: {}", e);
                e
            })?;
        if !status.success() {
            log!(self.options.log, "Dump failed: dot exited with {}", status);
            return err(StatusCode::IOError, &format!("dot exited with {}", status));
        }
        Ok(())
    }
}

//! Text codec for the solver input file
//!
//! The file is a fixed sequence of records, one per significant line:
//!
//! ```text
//! title
//! frame quadrature (3)          wall quadrature (2)
//! unit system                   analysis type
//! has X accelerogram            has Y accelerogram
//! damping ratio                 scale factor
//! [X accelerogram path]         [Y accelerogram path]
//! nodes beams braces walls frame-types wall-types
//! node records                  tag x y z
//! frame section records         material E G width height
//! wall section records          3 lines of 6 values each
//! beam / brace records          slot tag-kind i j section
//! wall records                  slot i j section orientation
//! mass count + records          index node mass
//! BC count + records            index node count 0 six DOF ranks
//! base shear count [+ list]
//! relative tolerance (3)        absolute tolerance (3)
//! ```
//!
//! Tabs and commas act as spaces, `!` starts a comment and blank lines are
//! ignored. Loading is not transactional: on a parse failure the records
//! read before the failing line stay in the model.

mod reader;
mod writer;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::analysis::{Direction, Tolerance};
use crate::elements::{Element, Fixity, FrameSection, MaterialKind, Node, WallSection, WALL_ROW_LEN};
use crate::error::{ModelResult, ParseError};
use crate::model::{EntityKind, FrameModel, Renumbering, Tag};

use reader::RecordReader;

pub use writer::sci;

impl FrameModel {
    /// Load a model file into this model.
    ///
    /// The current content is kept; sections from the file are added under
    /// tags 1..=N and elements under fresh tags. A file that cannot be
    /// opened reads as empty input and fails on the title record.
    pub fn load_model<P: AsRef<Path>>(&mut self, path: P) -> ModelResult<()> {
        let path = path.as_ref();
        log::info!("Loading model from {}", path.display());
        match File::open(path) {
            Ok(file) => self.read_from(BufReader::new(file)),
            Err(err) => {
                log::warn!("Cannot open {}: {}", path.display(), err);
                self.read_from(std::io::empty())
            }
        }
    }

    /// Load a model file into a fresh model
    pub fn from_file<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let mut model = Self::new();
        model.load_model(path)?;
        Ok(model)
    }

    /// Compact the model and write it to a file
    pub fn save_model<P: AsRef<Path>>(&mut self, path: P) -> ModelResult<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()?;
        log::info!("Saved model to {}", path.display());
        Ok(())
    }

    /// Compact the model, then serialize it. Returns the tag moves made by
    /// the compaction.
    pub fn write_to<W: Write>(&mut self, out: &mut W) -> ModelResult<Renumbering> {
        let renumbering = self.compress();
        writer::write_model(self, out)?;
        Ok(renumbering)
    }

    /// Serialize into a string
    pub fn to_text(&mut self) -> ModelResult<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Read records from any buffered input into this model
    pub fn read_from<R: BufRead>(&mut self, input: R) -> ModelResult<()> {
        let mut reader = RecordReader::new(input);
        self.read_records(&mut reader)?;
        log::info!(
            "Loaded {} node(s), {} element(s), {} frame section(s), {} wall section(s)",
            self.tags(EntityKind::Node).len(),
            self.tags(EntityKind::Element).len(),
            self.tags(EntityKind::FrameSection).len(),
            self.tags(EntityKind::WallSection).len()
        );
        Ok(())
    }

    fn read_records<R: BufRead>(&mut self, reader: &mut RecordReader<R>) -> Result<(), ParseError> {
        reader.next_record("title")?;

        self.change_frame_quadrature(reader.next_record("frame quadrature")?.numbers(0)?);
        self.change_wall_quadrature(reader.next_record("wall quadrature")?.numbers(0)?);
        self.change_unit(reader.next_record("unit system")?.number(0)?);
        self.change_analysis_type(reader.next_record("analysis type")?.number(0)?);

        let has_accx = reader.next_record("X accelerogram flag")?.number::<i32>(0)? == 1;
        let has_accy = reader.next_record("Y accelerogram flag")?.number::<i32>(0)? == 1;
        self.change_damping(reader.next_record("damping ratio")?.number(0)?);
        self.change_scale(reader.next_record("scale factor")?.number(0)?);
        if has_accx {
            let record = reader.next_record("X accelerogram")?;
            self.change_accelerogram(Direction::X, record.field(0)?);
        }
        if has_accy {
            let record = reader.next_record("Y accelerogram")?;
            self.change_accelerogram(Direction::Y, record.field(0)?);
        }

        let [nodes, beams, braces, walls, frame_types, wall_types]: [usize; 6] =
            reader.next_record("entity counts")?.numbers(0)?;

        for _ in 0..nodes {
            let record = reader.next_record("node")?;
            let tag: Tag = record.number(0)?;
            let [x, y, z] = record.numbers(1)?;
            if !self.add_node(tag, Node::new(x, y, z)) {
                log::warn!("Skipping node {}: tag unavailable", tag);
            }
        }

        for tag in (1..).take(frame_types) {
            let record = reader.next_record("frame section")?;
            let material = MaterialKind::from_token(record.field(0)?);
            let [e, g, width, height] = record.numbers(1)?;
            if !self.add_frame_section(tag, FrameSection::new(material, e, g, width, height)) {
                log::warn!("Skipping frame section {}: tag unavailable", tag);
            }
        }

        for tag in (1..).take(wall_types) {
            let mut rows = [[0.0; WALL_ROW_LEN]; 3];
            for row in rows.iter_mut() {
                *row = reader.next_record("wall section")?.numbers(0)?;
            }
            if !self.add_wall_section(tag, WallSection::from_rows(rows)) {
                log::warn!("Skipping wall section {}: tag unavailable", tag);
            }
        }

        for _ in 0..beams {
            let record = reader.next_record("beam element")?;
            let [i_node, j_node, section] = record.numbers(2)?;
            self.add_loaded_element(Element::frame(i_node, j_node, section));
        }

        for _ in 0..braces {
            let record = reader.next_record("brace element")?;
            let [i_node, j_node, section] = record.numbers(2)?;
            self.add_loaded_element(Element::brace(i_node, j_node, section));
        }

        for _ in 0..walls {
            let record = reader.next_record("wall element")?;
            let [i_node, j_node, section] = record.numbers(1)?;
            let orientation = record.number(4)?;
            self.add_loaded_element(Element::wall(i_node, j_node, section, orientation));
        }

        let masses: usize = reader.next_record("mass count")?.number(0)?;
        for _ in 0..masses {
            let record = reader.next_record("mass")?;
            let tag: Tag = record.number(1)?;
            let mass = record.number(2)?;
            if !self.contains(EntityKind::Node, tag) {
                log::warn!("Mass assigned to missing node {}", tag);
            }
            self.change_mass(tag, mass);
        }

        let supports: usize = reader.next_record("boundary condition count")?.number(0)?;
        for _ in 0..supports {
            let record = reader.next_record("boundary condition")?;
            let tag: Tag = record.number(1)?;
            let ranks: [i64; 6] = record.numbers(4)?;
            if !self.contains(EntityKind::Node, tag) {
                log::warn!("Boundary condition assigned to missing node {}", tag);
            }
            self.change_fixity(tag, Fixity::from_array(ranks.map(|rank| rank != 0)));
        }

        // base shear node list, derived from the fixities on save. An empty
        // list may be written out as a lone `0` line.
        let base_shear = reader.next_record("base shear count")?;
        let empty_list = base_shear.number::<i64>(0).ok() == Some(0);
        if !empty_list {
            reader.next_record("base shear nodes")?;
        }

        let mut relative = reader.next_record("relative tolerance")?;
        if empty_list && relative.len() == 1 {
            relative = reader.next_record("relative tolerance")?;
        }
        let [force, position, displacement] = relative.numbers(0)?;
        self.change_relative_tolerance(Tolerance::new(force, position, displacement));
        let [force, position, displacement] = reader.next_record("absolute tolerance")?.numbers(0)?;
        self.change_absolute_tolerance(Tolerance::new(force, position, displacement));

        Ok(())
    }

    fn add_loaded_element(&mut self, element: Element) {
        let tag = self.next_tag(EntityKind::Element);
        if !self.add_element(tag, element) {
            log::warn!("Skipping element {}: end node missing", tag);
        }
    }
}

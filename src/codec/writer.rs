//! Solver file emission

use std::io::{self, Write};

use crate::analysis::Direction;
use crate::elements::ElementKind;
use crate::model::{EntityKind, FrameModel, Tag};

pub(crate) const TITLE: &str = "MODEL GENERATED BY FRAME MODEL CREATOR";

/// Scientific notation with 4 significant digits and a signed two-digit
/// exponent, e.g. `2.000e+05`
pub fn sci(value: f64) -> String {
    let formatted = format!("{:.3e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        // inf and NaN have no exponent
        None => formatted,
    }
}

fn sci_join(values: &[f64]) -> String {
    values.iter().map(|&value| sci(value)).collect::<Vec<_>>().join(" ")
}

pub(crate) fn write_model<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    write_header(model, out)?;
    write_counts(model, out)?;
    write_nodes(model, out)?;
    write_frame_sections(model, out)?;
    write_wall_sections(model, out)?;
    write_elements(model, out)?;
    write_masses(model, out)?;
    write_boundary_conditions(model, out)?;

    let settings = &model.settings;
    writeln!(out, "{}", sci_join(&settings.relative_tolerance.as_array()))?;
    writeln!(out, "{}", sci_join(&settings.absolute_tolerance.as_array()))?;
    Ok(())
}

fn write_header<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    let settings = &model.settings;
    let [qf0, qf1, qf2] = settings.frame_quadrature;
    let [qw0, qw1] = settings.wall_quadrature;
    let accx = settings.accelerogram(Direction::X);
    let accy = settings.accelerogram(Direction::Y);

    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{} {} {}", qf0, qf1, qf2)?;
    writeln!(out, "{} {}", qw0, qw1)?;
    writeln!(out, "{}\n", settings.unit_system)?;
    writeln!(out, "{}", settings.analysis_type())?;
    writeln!(out, "{}", u8::from(accx.is_some()))?;
    writeln!(out, "{}", u8::from(accy.is_some()))?;
    writeln!(out, "{}", sci(settings.damping_ratio()))?;
    writeln!(out, "{}", sci(settings.scale_factor()))?;
    for path in [accx, accy].into_iter().flatten() {
        writeln!(out, "{}", path)?;
    }
    writeln!(out)
}

fn write_counts<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {} {} {} {}\n",
        model.tags(EntityKind::Node).len(),
        model.element_count(ElementKind::Frame),
        model.element_count(ElementKind::Brace),
        model.element_count(ElementKind::Wall),
        model.tags(EntityKind::FrameSection).len(),
        model.tags(EntityKind::WallSection).len(),
    )
}

fn write_nodes<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    writeln!(out, "! NODE")?;
    for (tag, node) in model.nodes() {
        writeln!(out, "{} {}", tag, sci_join(&node.coords()))?;
    }
    writeln!(out, "\n")
}

fn write_frame_sections<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    writeln!(out, "! FRAME MEMBER TYPE")?;
    for (tag, section) in model.frame_sections() {
        writeln!(out, "! NUMBER {}", tag)?;
        writeln!(out, "{} {}", section.material.code(), sci_join(&section.parameters))?;
    }
    writeln!(out, "\n")
}

fn write_wall_sections<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    writeln!(out, "! WALL DATA")?;
    for (tag, section) in model.wall_sections() {
        writeln!(out, "! NUMBER {}", tag)?;
        for row in section.rows() {
            writeln!(out, "{}", sci_join(row))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Frames, braces and walls as three groups, each by ascending element tag
fn write_elements<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    let group = |kind: ElementKind| model.elements().filter(move |(_, element)| element.kind == kind);

    writeln!(out, "! FRAME ELEMENT")?;
    for (tag, element) in group(ElementKind::Frame) {
        writeln!(out, "{} 1 {} {} {}", tag, element.i_node(), element.j_node(), element.section)?;
    }

    writeln!(out, "\n\n! BRACE ELEMENT")?;
    for (tag, element) in group(ElementKind::Brace) {
        writeln!(out, "{} 2 {} {} {}", tag, element.i_node(), element.j_node(), element.section)?;
    }

    writeln!(out, "\n\n! WALL ELEMENT")?;
    for (tag, element) in group(ElementKind::Wall) {
        writeln!(
            out,
            "{} {} {} {} {}",
            tag,
            element.i_node(),
            element.j_node(),
            element.section,
            element.orientation
        )?;
    }
    writeln!(out, "\n")
}

fn write_masses<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    let massive: Vec<(Tag, f64)> = model
        .nodes()
        .filter(|(_, node)| node.mass > 0.0)
        .map(|(tag, node)| (tag, node.mass))
        .collect();

    writeln!(out, "{} ! TOTAL NUMBER OF NODES APPLIED WITH MASS", massive.len())?;
    for (index, (tag, mass)) in massive.iter().enumerate() {
        writeln!(out, "{} {} {}", index + 1, tag, sci(*mass))?;
    }
    writeln!(out)
}

/// Supported nodes with per-DOF ranks, then the base shear node list
fn write_boundary_conditions<W: Write>(model: &FrameModel, out: &mut W) -> io::Result<()> {
    let supported: Vec<Tag> = model
        .nodes()
        .filter(|(_, node)| node.fixity.is_supported())
        .map(|(tag, _)| tag)
        .collect();

    writeln!(out, "{} ! TOTAL NUMBER OF NODES APPLIED WITH BC", supported.len())?;
    for (index, (tag, node)) in model
        .nodes()
        .filter(|(_, node)| node.fixity.is_supported())
        .enumerate()
    {
        let ranks = node.fixity.dof_ranks().map(|rank| rank.to_string()).join(" ");
        writeln!(
            out,
            "{} {} {} 0 {}",
            index + 1,
            tag,
            node.fixity.num_restrained(),
            ranks
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{} ! NUMBER OF NODES USED FOR CALCULATING BASE SHEAR", supported.len())?;
    if !supported.is_empty() {
        let list: Vec<String> = supported.iter().map(Tag::to_string).collect();
        writeln!(out, "{}", list.join(" "))?;
    }
    writeln!(out)
}

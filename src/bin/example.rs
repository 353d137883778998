//! Frame Model Example - Portal Frame with an Infill Wall

use std::io::Write;

use anyhow::Result;
use frame_model::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut model = FrameModel::new();

    // Create a simple portal frame
    //
    //     3 -------- 4
    //     | \        |
    //     |   wall   |
    //     |        \ |
    //     1          2
    //     ^          ^
    //   Fixed     Fixed
    //

    let height = 3.0;
    let span = 6.0;

    model.add_node(1, Node::new(0.0, 0.0, 0.0).with_fixity(Fixity::fixed()));
    model.add_node(2, Node::new(span, 0.0, 0.0).with_fixity(Fixity::fixed()));
    model.add_node(3, Node::new(0.0, 0.0, height).with_mass(10.0));
    model.add_node(4, Node::new(span, 0.0, height).with_mass(10.0));

    // Steel columns and beam
    model.add_frame_section(1, FrameSection::steel(2.0e5, 8.0e4, 0.3, 0.3));
    model.add_frame_section(2, FrameSection::steel(2.0e5, 8.0e4, 0.3, 0.5));

    // Wall: geometry row, then the two backbone curves
    model.add_wall_section(
        1,
        WallSection::from_rows([
            [0.15, 2.4, 2.4, 0.0, 0.0, 0.0],
            [1.0e3, 2.0e3, 2.5e3, 0.002, 0.01, 0.03],
            [0.8e3, 1.6e3, 2.0e3, 0.002, 0.01, 0.03],
        ]),
    );

    model.add_element(1, Element::frame(1, 3, 1));
    model.add_element(2, Element::frame(2, 4, 1));
    model.add_element(3, Element::frame(3, 4, 2));
    model.add_element(4, Element::wall(1, 4, 1, 1));

    model.change_damping(2.0);

    // Refine the beam
    let parts = model.split_element(3, 4);
    eprintln!(
        "Split beam into elements {:?}, interior nodes {:?}",
        parts.elements, parts.nodes
    );
    eprintln!("{}", model.summary());

    match std::env::args().nth(1) {
        Some(path) => {
            model.save_model(&path)?;
            eprintln!("Wrote {}", path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            model.write_to(&mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

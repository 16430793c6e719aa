//! Legacy VTK export
use crate::{
    traits::{Mesh, VtkExport},
    types::CoordinateType,
};

impl<M: Mesh> VtkExport for M {
    fn to_vtk_string(&self, coordinate_type: CoordinateType) -> String {
        let counts = self.nodes_per_direction();
        let dims = (0..3)
            .map(|i| counts.get(i).copied().unwrap_or(1).to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut vtk_s = String::from("");
        vtk_s.push_str("# vtk DataFile Version 3.0\n");
        vtk_s.push_str("structgrid output\n");
        vtk_s.push_str("ASCII\n");
        vtk_s.push_str("DATASET STRUCTURED_GRID\n");
        vtk_s.push_str(&format!("DIMENSIONS {dims}\n"));
        vtk_s.push_str(&format!("POINTS {} double\n", self.node_count()));
        for node in (0..self.node_count()).filter_map(|i| self.node(i)) {
            let p = node.coordinates().position_3d(coordinate_type);
            vtk_s.push_str(&format!("{:?} {:?} {:?}\n", p[0], p[1], p[2]));
        }
        vtk_s
    }
}

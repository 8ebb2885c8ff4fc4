/// Whether repeated insertions of the same vertex pair create parallel edges.
///
/// With [`EdgeMultiplicity::SingleEdge`] (the default) a static graph is
/// simple: adding an existing edge again changes nothing.  With
/// [`EdgeMultiplicity::MultipleEdges`] each insertion increments the edge's
/// multiplicity, which shows up in `num_edges`, `degree` and `adjacency`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeMultiplicity {
    #[default]
    SingleEdge,
    MultipleEdges,
}

impl EdgeMultiplicity {
    pub fn allows_parallel_edges(&self) -> bool {
        match self {
            EdgeMultiplicity::SingleEdge => false,
            EdgeMultiplicity::MultipleEdges => true,
        }
    }
}

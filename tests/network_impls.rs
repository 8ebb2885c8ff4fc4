mod static_graph {
    pub use linkgraph::{network_tests, network_tests::TestNetworkBuilder, prelude::*};
    use std::marker::PhantomData;

    pub struct GraphBuilder<D>(PhantomData<D>);

    impl<D: Directedness> TestNetworkBuilder for GraphBuilder<D> {
        type Network = AdjacencyGraph<D>;

        fn new_network() -> Self::Network {
            AdjacencyGraph::new()
        }

        fn add_vertex(network: &mut Self::Network, _i: usize) -> VertexId {
            network.add_vertex()
        }

        fn add_labeled_vertex(
            network: &mut Self::Network,
            _i: usize,
            label: &str,
        ) -> Result<VertexId, GraphError> {
            network.add_labeled_vertex(label)
        }

        fn add_edge(
            network: &mut Self::Network,
            u: VertexId,
            v: VertexId,
            _i: usize,
        ) -> Result<(), GraphError> {
            network.add_edge(u, v).map(drop)
        }
    }

    pub struct MultigraphBuilder<D>(PhantomData<D>);

    impl<D: Directedness> TestNetworkBuilder for MultigraphBuilder<D> {
        type Network = AdjacencyGraph<D>;

        fn new_network() -> Self::Network {
            AdjacencyGraph::new().with_multiplicity(EdgeMultiplicity::MultipleEdges)
        }

        fn add_vertex(network: &mut Self::Network, i: usize) -> VertexId {
            GraphBuilder::<D>::add_vertex(network, i)
        }

        fn add_labeled_vertex(
            network: &mut Self::Network,
            i: usize,
            label: &str,
        ) -> Result<VertexId, GraphError> {
            GraphBuilder::<D>::add_labeled_vertex(network, i, label)
        }

        fn add_edge(
            network: &mut Self::Network,
            u: VertexId,
            v: VertexId,
            i: usize,
        ) -> Result<(), GraphError> {
            GraphBuilder::<D>::add_edge(network, u, v, i)
        }
    }

    network_tests!(undirected_single, GraphBuilder<Undirected>);
    network_tests!(directed_single, GraphBuilder<Directed>);
    network_tests!(undirected_multiple, MultigraphBuilder<Undirected>);
    network_tests!(directed_multiple, MultigraphBuilder<Directed>);
}

mod bipartite {
    pub use linkgraph::{network_tests, network_tests::TestNetworkBuilder, prelude::*};
    use std::marker::PhantomData;

    fn group_of(i: usize) -> Group {
        if i % 2 == 0 { Group::Top } else { Group::Bottom }
    }

    pub struct BipartiteBuilder<D>(PhantomData<D>);

    impl<D: Directedness> TestNetworkBuilder for BipartiteBuilder<D> {
        type Network = BipartiteGraph<D>;

        fn new_network() -> Self::Network {
            BipartiteGraph::new()
        }

        fn add_vertex(network: &mut Self::Network, i: usize) -> VertexId {
            network.add_vertex_w_group(group_of(i))
        }

        fn add_labeled_vertex(
            network: &mut Self::Network,
            i: usize,
            label: &str,
        ) -> Result<VertexId, GraphError> {
            network.add_labeled_vertex_w_group(group_of(i), label)
        }

        fn add_edge(
            network: &mut Self::Network,
            u: VertexId,
            v: VertexId,
            _i: usize,
        ) -> Result<(), GraphError> {
            network.add_edge(u, v).map(drop)
        }
    }

    pub struct BiStreamBuilder<D>(PhantomData<D>);

    impl<D: Directedness> TestNetworkBuilder for BiStreamBuilder<D> {
        type Network = BipartiteStreamGraph<D>;

        fn new_network() -> Self::Network {
            BipartiteStreamGraph::with_definition(0, 20).unwrap()
        }

        fn add_vertex(network: &mut Self::Network, i: usize) -> VertexId {
            network.add_vertex_w_group(group_of(i))
        }

        fn add_labeled_vertex(
            network: &mut Self::Network,
            i: usize,
            label: &str,
        ) -> Result<VertexId, GraphError> {
            network.add_labeled_vertex_w_group(group_of(i), label)
        }

        fn add_edge(
            network: &mut Self::Network,
            u: VertexId,
            v: VertexId,
            i: usize,
        ) -> Result<(), GraphError> {
            let start = (i % 15) as Time;
            network.add_edge_w_time(u, v, start, start + 1 + (i % 4) as Time).map(drop)
        }
    }

    network_tests!(undirected_bipartite, BipartiteBuilder<Undirected>);
    network_tests!(directed_bipartite, BipartiteBuilder<Directed>);
    network_tests!(undirected_bi_link_stream, BiStreamBuilder<Undirected>);
    network_tests!(directed_bi_link_stream, BiStreamBuilder<Directed>);
}

mod link_stream {
    pub use linkgraph::{network_tests, network_tests::TestNetworkBuilder, prelude::*};
    use std::marker::PhantomData;

    pub struct StreamBuilder<D>(PhantomData<D>);

    impl<D: Directedness> TestNetworkBuilder for StreamBuilder<D> {
        type Network = StreamGraph<D>;

        fn new_network() -> Self::Network {
            StreamGraph::with_definition(0, 20).unwrap()
        }

        fn add_vertex(network: &mut Self::Network, _i: usize) -> VertexId {
            network.add_vertex()
        }

        fn add_labeled_vertex(
            network: &mut Self::Network,
            _i: usize,
            label: &str,
        ) -> Result<VertexId, GraphError> {
            network.add_labeled_vertex(label)
        }

        fn add_edge(
            network: &mut Self::Network,
            u: VertexId,
            v: VertexId,
            i: usize,
        ) -> Result<(), GraphError> {
            let start = (i % 15) as Time;
            network.add_edge_w_time(u, v, start, start + 1 + (i % 4) as Time).map(drop)
        }
    }

    network_tests!(undirected_link_stream, StreamBuilder<Undirected>);
    network_tests!(directed_link_stream, StreamBuilder<Directed>);
}

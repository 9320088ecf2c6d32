error_chain! {
    errors {
        DuplicateVertex {
            description("a vertex with an equal payload already exists")
            display("a vertex with an equal payload already exists")
        }

        MissingVertex {
            description("no vertex with the given payload or index exists")
            display("no vertex with the given payload or index exists")
        }

        MissingEdge {
            description("the source vertex has no edge to the destination vertex")
            display("the source vertex has no edge to the destination vertex")
        }

        IndexOverflow(slots: usize) {
            description("the vertex arena outgrew the index type")
            display("the vertex arena outgrew the index type at {} slots", slots)
        }
    }
}

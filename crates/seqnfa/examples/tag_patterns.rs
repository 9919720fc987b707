// Quick demo: search a tagged-word stream for noun phrases (Det Adj* Noun).
//
// Run with RUST_LOG=trace to watch the run engine step:
//   RUST_LOG=trace cargo run -p seqnfa --example tag_patterns

use seqnfa::{Graph, Nfa};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tag {
    Det,
    Adj,
    Noun,
    Verb,
}

fn main() {
    env_logger::init();

    let words: Vec<(&str, Tag)> = vec![
        ("the", Tag::Det),
        ("quick", Tag::Adj),
        ("brown", Tag::Adj),
        ("fox", Tag::Noun),
        ("jumps", Tag::Verb),
        ("a", Tag::Det),
        ("dog", Tag::Noun),
    ];

    // Det Adj* Noun, wired the way a query compiler would wire it.
    let mut graph: Graph<(&str, Tag), &str> = Graph::new();
    let start = graph.add_node();
    let after_det = graph.add_node();
    let adj_loop = graph.add_node();
    let done = graph.add_accepting();
    graph.add_transition(start, "det", |w: &(&str, Tag)| w.1 == Tag::Det, after_det);
    graph.add_epsilon(after_det, adj_loop);
    graph.add_transition(adj_loop, "adj", |w: &(&str, Tag)| w.1 == Tag::Adj, adj_loop);
    graph.add_transition(adj_loop, "noun", |w: &(&str, Tag)| w.1 == Tag::Noun, done);
    println!("pattern graph: {graph:?}");

    let nfa = Nfa::new(&graph, start);
    for m in nfa.find(&words) {
        let phrase: Vec<&str> = m.as_slice().iter().map(|w| w.0).collect();
        println!(
            "noun phrase at tokens {}..{}: {}",
            m.start(),
            m.end(),
            phrase.join(" ")
        );
    }
}

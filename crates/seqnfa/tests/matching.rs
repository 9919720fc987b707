//! End-to-end matching over tagged tokens.
//!
//! Exercises the engine the way a tokenizer pipeline would: a collaborator
//! compiles a token-level pattern into a graph of predicate transitions, and
//! the automaton is run over token streams to test and to search.
//!
//! Run: cargo test -p seqnfa --test matching

use seqnfa::{Graph, Nfa, NodeId};

// ---------------------------------------------------------------------------
// A tiny token model, standing in for a real tokenizer's output
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tag {
    Det,
    Adj,
    Noun,
    Verb,
    Punct,
}

#[derive(Clone, Copy, Debug)]
struct Token {
    text: &'static str,
    tag: Tag,
}

fn tok(text: &'static str, tag: Tag) -> Token {
    Token { text, tag }
}

fn sentence() -> Vec<Token> {
    vec![
        tok("the", Tag::Det),
        tok("quick", Tag::Adj),
        tok("brown", Tag::Adj),
        tok("fox", Tag::Noun),
        tok("jumps", Tag::Verb),
        tok("over", Tag::Punct), // deliberately mistagged filler
        tok("the", Tag::Det),
        tok("dog", Tag::Noun),
        tok(".", Tag::Punct),
    ]
}

// ---------------------------------------------------------------------------
// Pattern graphs, wired the way a query compiler would wire them
// ---------------------------------------------------------------------------

/// Det Adj* Noun -- a noun phrase with any number of adjectives.
///
/// The Adj* loop is a cyclic transition; an epsilon edge lets the adjective
/// block be skipped entirely.
fn noun_phrase() -> (Graph<Token, &'static str>, NodeId) {
    let mut g = Graph::new();
    let start = g.add_node();
    let after_det = g.add_node();
    let adj_loop = g.add_node();
    let done = g.add_accepting();

    g.add_transition(start, "det", |t: &Token| t.tag == Tag::Det, after_det);
    g.add_epsilon(after_det, adj_loop);
    g.add_transition(adj_loop, "adj", |t: &Token| t.tag == Tag::Adj, adj_loop);
    g.add_transition(adj_loop, "noun", |t: &Token| t.tag == Tag::Noun, done);
    (g, start)
}

/// A single token whose text is "fox".
fn literal_fox() -> (Graph<Token, &'static str>, NodeId) {
    let mut g = Graph::new();
    let start = g.add_node();
    let done = g.add_accepting();
    g.add_transition(start, "fox", |t: &Token| t.text == "fox", done);
    (g, start)
}

fn texts(tokens: &[Token]) -> Vec<&'static str> {
    tokens.iter().map(|t| t.text).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn noun_phrase_search_finds_both_phrases() {
    let (g, entry) = noun_phrase();
    let nfa = Nfa::new(&g, entry);
    let tokens = sentence();

    let found: Vec<(usize, Vec<&str>)> = nfa
        .find(&tokens)
        .map(|m| (m.start(), texts(m.as_slice())))
        .collect();

    assert_eq!(
        found,
        vec![
            (0, vec!["the", "quick", "brown", "fox"]),
            (6, vec!["the", "dog"]),
        ]
    );
}

#[test]
fn noun_phrase_whole_match() {
    let (g, entry) = noun_phrase();
    let nfa = Nfa::new(&g, entry);

    let np = [tok("the", Tag::Det), tok("red", Tag::Adj), tok("cat", Tag::Noun)];
    assert!(nfa.is_match(&np));

    let bare = [tok("the", Tag::Det), tok("cat", Tag::Noun)];
    assert!(nfa.is_match(&bare));

    // A trailing verb breaks the whole-sequence requirement.
    let with_verb = [tok("the", Tag::Det), tok("cat", Tag::Noun), tok("ran", Tag::Verb)];
    assert!(!nfa.is_match(&with_verb));

    assert!(!nfa.is_match(&[]));
}

#[test]
fn streaming_run_reports_each_noun_phrase_end() {
    // From the sentence start exactly one noun phrase can complete:
    // "the quick brown fox", closed by the noun at token 3.
    let (g, entry) = noun_phrase();
    let nfa = Nfa::new(&g, entry);
    let tokens = sentence();

    let offsets: Vec<usize> = nfa.run(&tokens, false).collect();
    assert_eq!(offsets, [4]); // "the quick brown fox" consumes 4 tokens
}

#[test]
fn literal_predicate_search() {
    let (g, entry) = literal_fox();
    let nfa = Nfa::new(&g, entry);
    let tokens = sentence();

    let found: Vec<usize> = nfa.find(&tokens).map(|m| m.start()).collect();
    assert_eq!(found, [3]);
}

#[test]
fn two_handles_share_one_graph() {
    let (g, entry) = noun_phrase();
    let first = Nfa::new(&g, entry);
    let second = Nfa::new(&g, entry);
    let tokens = sentence();

    // Interleaved lazy searches over the same graph must not disturb each
    // other: the trace is per run, the graph is read-only.
    let mut a = first.find(&tokens);
    let mut b = second.find(&tokens);
    let first_a = a.next().map(|m| m.start());
    let first_b = b.next().map(|m| m.start());
    assert_eq!(first_a, Some(0));
    assert_eq!(first_b, Some(0));
    assert_eq!(a.next().map(|m| m.start()), Some(6));
    assert_eq!(b.next().map(|m| m.start()), Some(6));
}

#[test]
fn trace_records_how_each_state_was_entered() {
    // Same wiring as noun_phrase(), ids kept for inspection.
    let mut g: Graph<Token, &'static str> = Graph::new();
    let start = g.add_node();
    let after_det = g.add_node();
    let adj_loop = g.add_node();
    let done = g.add_accepting();
    g.add_transition(start, "det", |t: &Token| t.tag == Tag::Det, after_det);
    g.add_epsilon(after_det, adj_loop);
    g.add_transition(adj_loop, "adj", |t: &Token| t.tag == Tag::Adj, adj_loop);
    g.add_transition(adj_loop, "noun", |t: &Token| t.tag == Tag::Noun, done);

    let nfa = Nfa::new(&g, start);
    let np = [tok("a", Tag::Det), tok("lazy", Tag::Adj), tok("dog", Tag::Noun)];

    let mut run = nfa.run(&np, true);
    assert_eq!(run.next(), Some(3));

    let accepting = g.node_ids().find(|&id| g.is_accepting(id)).unwrap();
    assert_eq!(accepting, done);

    // Each state remembers the transition that last entered it. The entry
    // node was never entered by a predicate transition, and adj_loop was
    // first reached over the silent edge, so its trace shows the later
    // self-loop step.
    let noun = run.trace(done).unwrap();
    assert_eq!((noun.from, noun.label), (adj_loop, "noun"));
    let adj = run.trace(adj_loop).unwrap();
    assert_eq!((adj.from, adj.label), (adj_loop, "adj"));
    let det = run.trace(after_det).unwrap();
    assert_eq!((det.from, det.label), (start, "det"));
    assert!(run.trace(start).is_none());
}

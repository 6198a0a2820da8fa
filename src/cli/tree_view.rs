//! Render the question tree with termtree.

use termtree::Tree;

use crate::domain::Node;

/// Render `node` as an indented tree; each child is prefixed with its answer.
pub fn render(node: &Node) -> String {
    to_termtree(node).to_string()
}

fn to_termtree(node: &Node) -> Tree<String> {
    match node {
        Node::Leaf(character) => Tree::new(character.name.clone()),
        Node::Internal {
            question, yes, no, ..
        } => Tree::new(question.clone()).with_leaves([branch("yes", yes), branch("no", no)]),
    }
}

fn branch(answer: &str, node: &Node) -> Tree<String> {
    let mut tree = to_termtree(node);
    tree.root = format!("{}: {}", answer, tree.root);
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attribute, Character};

    fn person(name: &str, alive: &str) -> Character {
        Character::from_fields(&[name, "f", alive, "a", "b", "c", "d", "no"]).unwrap()
    }

    #[test]
    fn given_two_leaf_tree_when_rendering_then_labels_branches() {
        let tree = Node::internal(
            Attribute::Alive,
            "true",
            Node::leaf(person("Ada", "yes")),
            Node::leaf(person("Bob", "no")),
        );

        let out = render(&tree);

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Is the person alive?");
        assert!(lines[1].ends_with("yes: Ada"));
        assert!(lines[2].ends_with("no: Bob"));
    }
}

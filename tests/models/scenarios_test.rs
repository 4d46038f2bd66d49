#[cfg(test)]
mod tests {
    use kintree::models::types::{same_child, same_parent};
    use kintree::{Child, Parent, PersonLike};

    /// Scenario A: spousal links mirrored by the caller on both sides
    #[test]
    fn test_mutual_spouse_links() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();

        father.borrow_mut().set_spouse(mother.clone());
        mother.borrow_mut().set_spouse(father.clone());

        assert!(same_parent(&father.borrow().spouse().unwrap(), &mother));
        assert!(same_parent(&mother.borrow().spouse().unwrap(), &father));
    }

    /// Scenario B: a child added to both parents' children sequences
    #[test]
    fn test_child_linked_to_both_parents() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let child = Child::new("Baby".to_string(), 1, father.clone(), mother.clone()).into_ref();

        father.borrow_mut().add_child(child.clone());
        mother.borrow_mut().add_child(child.clone());

        let fathers_children = father.borrow().children();
        let mothers_children = mother.borrow().children();
        assert_eq!(fathers_children.len(), 1);
        assert_eq!(mothers_children.len(), 1);
        assert!(same_child(&fathers_children[0], &child));
        assert!(same_child(&mothers_children[0], &child));
    }

    /// Scenario C: sibling links mirrored by the caller on both sides
    #[test]
    fn test_mutual_sibling_links() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let child1 =
            Child::new("Child1".to_string(), 5, father.clone(), mother.clone()).into_ref();
        let child2 =
            Child::new("Child2".to_string(), 3, father.clone(), mother.clone()).into_ref();

        child1.borrow_mut().add_sibling(child2.clone());
        child2.borrow_mut().add_sibling(child1.clone());

        let first = child1.borrow().siblings();
        let second = child2.borrow().siblings();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert!(same_child(&first[0], &child2));
        assert!(same_child(&second[0], &child1));
    }

    /// Scenario D: children appear in the order they were appended
    #[test]
    fn test_children_order_preserved() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let child1 =
            Child::new("Child1".to_string(), 5, father.clone(), mother.clone()).into_ref();
        let child2 =
            Child::new("Child2".to_string(), 3, father.clone(), mother.clone()).into_ref();

        father.borrow_mut().add_child(child1.clone());
        father.borrow_mut().add_child(child2.clone());

        let children = father.borrow().children();
        assert_eq!(children.len(), 2);
        assert!(same_child(&children[0], &child1));
        assert!(same_child(&children[1], &child2));
    }

    /// Boundary: fresh entities have empty sequences, never an absent marker
    #[test]
    fn test_fresh_sequences_are_empty() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let child = Child::new("Baby".to_string(), 1, father.clone(), mother);

        assert!(father.borrow().children().is_empty());
        assert!(child.siblings().is_empty());
    }

    /// Mutation through one handle is visible through every other handle
    #[test]
    fn test_shared_mutation_is_visible_everywhere() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let child = Child::new("Baby".to_string(), 1, father.clone(), mother.clone()).into_ref();

        father.borrow_mut().add_child(child.clone());
        mother.borrow_mut().set_spouse(father.clone());

        // Rename the father through the child's parent link
        child.borrow().parent1().borrow_mut().set_name("Jonathan".to_string());

        assert_eq!(father.borrow().name(), "Jonathan");
        assert_eq!(
            mother.borrow().spouse().unwrap().borrow().name(),
            "Jonathan"
        );
    }
}

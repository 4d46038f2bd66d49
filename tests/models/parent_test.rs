#[cfg(test)]
mod tests {
    use kintree::models::types::same_parent;
    use kintree::{Child, Parent, PersonLike};

    #[test]
    fn test_parent_constructors() {
        let alone = Parent::new("John".to_string(), 35);
        assert_eq!(alone.name(), "John");
        assert_eq!(alone.age(), 35);
        assert!(alone.spouse().is_none());
        assert!(alone.children().is_empty());

        let mary = Parent::new("Mary".to_string(), 32).into_ref();
        let married = Parent::with_spouse("John".to_string(), 35, mary.clone());
        assert!(same_parent(&married.spouse().unwrap(), &mary));
        assert!(married.children().is_empty());
    }

    #[test]
    fn test_setter_idempotence() {
        let spouse = Parent::new("Mary".to_string(), 32).into_ref();
        let mut parent = Parent::new("John".to_string(), 35);

        parent.set_name("Johan".to_string());
        parent.set_name("Johan".to_string());
        parent.set_age(40);
        parent.set_age(40);
        parent.set_spouse(spouse.clone());
        parent.set_spouse(spouse.clone());

        assert_eq!(parent.name(), "Johan");
        assert_eq!(parent.age(), 40);
        assert!(same_parent(&parent.spouse().unwrap(), &spouse));
    }

    #[test]
    fn test_add_child_grows_by_exactly_one() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();

        let mut previous: Vec<_> = Vec::new();
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            let child =
                Child::new((*name).to_string(), 1, father.clone(), mother.clone()).into_ref();
            father.borrow_mut().add_child(child.clone());

            let children = father.borrow().children();
            assert_eq!(children.len(), i + 1);
            // Prior elements and their order are unchanged
            for (j, earlier) in previous.iter().enumerate() {
                assert!(std::rc::Rc::ptr_eq(&children[j], earlier));
            }
            assert!(std::rc::Rc::ptr_eq(&children[i], &child));
            previous.push(child);
        }
    }

    #[test]
    fn test_set_children_can_empty_the_sequence() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let child = Child::new("Baby".to_string(), 1, father.clone(), mother).into_ref();

        father.borrow_mut().add_child(child);
        father.borrow_mut().set_children(Vec::new());

        assert!(father.borrow().children().is_empty());
    }
}

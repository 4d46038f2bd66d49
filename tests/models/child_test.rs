#[cfg(test)]
mod tests {
    use kintree::models::types::{same_child, same_parent};
    use kintree::{Child, Parent, PersonLike};

    #[test]
    fn test_child_constructor() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();

        let child = Child::new("Baby".to_string(), 1, father.clone(), mother.clone());

        assert_eq!(child.name(), "Baby");
        assert_eq!(child.age(), 1);
        assert!(same_parent(&child.parent1(), &father));
        assert!(same_parent(&child.parent2(), &mother));
        assert!(child.siblings().is_empty());
    }

    #[test]
    fn test_parents_survive_every_mutation() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let other =
            Child::new("Other".to_string(), 7, father.clone(), mother.clone()).into_ref();

        let mut child = Child::new("Baby".to_string(), 1, father.clone(), mother.clone());
        child.set_name("Grown".to_string());
        child.set_age(30);
        child.add_sibling(other.clone());
        child.set_siblings(vec![other]);

        assert!(same_parent(&child.parent1(), &father));
        assert!(same_parent(&child.parent2(), &mother));
    }

    #[test]
    fn test_sibling_setter_idempotence() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let sibling =
            Child::new("Sib".to_string(), 4, father.clone(), mother.clone()).into_ref();

        let mut child = Child::new("Baby".to_string(), 1, father, mother);
        child.set_siblings(vec![sibling.clone()]);
        child.set_siblings(vec![sibling.clone()]);

        let siblings = child.siblings();
        assert_eq!(siblings.len(), 1);
        assert!(same_child(&siblings[0], &sibling));
    }

    #[test]
    fn test_sibling_snapshot_is_independent() {
        let father = Parent::new("John".to_string(), 35).into_ref();
        let mother = Parent::new("Mary".to_string(), 32).into_ref();
        let sibling =
            Child::new("Sib".to_string(), 4, father.clone(), mother.clone()).into_ref();

        let mut child = Child::new("Baby".to_string(), 1, father, mother);
        child.add_sibling(sibling);

        let mut snapshot = child.siblings();
        snapshot.clear();

        assert_eq!(child.sibling_count(), 1);
    }

    #[test]
    fn test_same_parent_on_both_sides_permitted() {
        // No validation: both parent links may point at the same entity
        let solo = Parent::new("Solo".to_string(), 40).into_ref();
        let child = Child::new("Baby".to_string(), 1, solo.clone(), solo.clone());

        assert!(same_parent(&child.parent1(), &child.parent2()));
    }
}

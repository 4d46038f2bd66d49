use anyhow::Context;
use kintree::{Child, FamilyStore, Parent};
use log::info;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Build the canonical two-parent family
    let mut store = FamilyStore::new();

    let father_ref = Parent::new("John".to_string(), 35).into_ref();
    let mother_ref = Parent::new("Mary".to_string(), 32).into_ref();
    let father = store.register_parent(father_ref.clone());
    let mother = store.register_parent(mother_ref.clone());
    store.link_spouses(father, mother)?;
    info!("registered parents {father} and {mother}");

    let baby_ref =
        Child::new("Baby".to_string(), 1, father_ref.clone(), mother_ref.clone()).into_ref();
    let child1_ref =
        Child::new("Child1".to_string(), 5, father_ref.clone(), mother_ref.clone()).into_ref();
    let child2_ref =
        Child::new("Child2".to_string(), 3, father_ref, mother_ref).into_ref();

    let baby = store.register_child(baby_ref.clone());
    let child1 = store.register_child(child1_ref.clone());
    let child2 = store.register_child(child2_ref.clone());

    for child in [baby, child1, child2] {
        store.link_child(father, child)?;
        store.link_child(mother, child)?;
    }
    store.link_siblings(child1, child2)?;

    // Deliberately one-way: the audit below should flag these
    baby_ref.borrow_mut().add_sibling(child1_ref);
    baby_ref.borrow_mut().add_sibling(child2_ref);

    info!(
        "store holds {} parents and {} children",
        store.parent_count(),
        store.child_count()
    );

    // Audit the reciprocal-link convention
    let report = store.audit();
    if report.consistent {
        info!("all reciprocal links are mirrored");
    } else {
        info!("{} one-way link(s) found", report.issues.len());
    }

    // Export a flattened snapshot
    let json = store
        .snapshot()
        .context("flattening the family graph")?
        .to_json()?;
    println!("{json}");

    Ok(())
}

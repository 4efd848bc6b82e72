use searchsync_core::{DefinitionStore, IndexCatalog};
use searchsync_reconcile::Config;

/// List the selected specs and whether their definition files are present.
pub fn show_specs(config: &Config, catalog: &IndexCatalog) {
    let store = DefinitionStore::new(&config.definitions_dir);

    if catalog.is_empty() {
        println!("No index specs selected");
        return;
    }

    println!("Definitions directory: {}", store.root().display());
    println!("Collections: {}\n", catalog.collections().join(", "));
    for spec in catalog {
        let path = store.path_for(spec);
        let marker = if path.exists() { "✓" } else { "✗ missing" };
        println!(
            "  {:<16} {:<24} {} {}",
            spec.collection,
            spec.name,
            path.display(),
            marker
        );
    }
}

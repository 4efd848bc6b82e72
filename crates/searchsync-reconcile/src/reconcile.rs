//! Desired-versus-live reconciliation.
//!
//! For each spec, in catalog order: list the live index names on its
//! collection, load its definition, then create or update. A failed listing
//! is not fatal; the collection is treated as having no indexes. Everything
//! else (unreadable definition, rejected admin command) stops the run.

use std::fmt;

use searchsync_core::{DefinitionStore, IndexCatalog, IndexDefinition, IndexSpec};

use crate::admin::IndexAdmin;
use crate::error::SyncResult;

/// What reconciliation does for one spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The index does not exist yet.
    Create,
    /// The index exists and its definition is replaced.
    Update,
    /// The index exists and is dropped, then created again.
    Recreate,
}

impl Action {
    /// Pick the action for an index given whether it already exists.
    pub fn decide(exists: bool, force_recreate: bool) -> Self {
        match (exists, force_recreate) {
            (false, _) => Self::Create,
            (true, false) => Self::Update,
            (true, true) => Self::Recreate,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Recreate => "recreate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Report intended actions without issuing create, update or drop.
    pub dry_run: bool,
    /// Drop and recreate indexes that already exist instead of updating.
    pub force_recreate: bool,
}

/// The result of reconciling one spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOutcome {
    pub spec: IndexSpec,
    pub action: Action,
    /// `false` when the action was only reported (dry run).
    pub applied: bool,
    /// Set when the live indexes could not be listed and the collection was
    /// assumed to have none.
    pub listing_error: Option<String>,
}

impl fmt::Display for SpecOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.applied {
            let done = match self.action {
                Action::Create => "created",
                Action::Update => "updated",
                Action::Recreate => "recreated",
            };
            write!(
                f,
                "✓ {} '{}' on '{}'",
                done, self.spec.name, self.spec.collection
            )?;
        } else {
            write!(
                f,
                "[dry run] would {} '{}' on '{}' from {}",
                self.action,
                self.spec.name,
                self.spec.collection,
                self.spec.definition_file.display()
            )?;
        }

        if let Some(error) = &self.listing_error {
            write!(
                f,
                " (existing indexes could not be listed, assumed none: {})",
                error
            )?;
        }
        Ok(())
    }
}

/// Drives one reconciliation run against an [`IndexAdmin`].
#[derive(Debug)]
pub struct Reconciler<'a, A: IndexAdmin + ?Sized> {
    admin: &'a A,
    store: DefinitionStore,
    options: ReconcileOptions,
}

impl<'a, A: IndexAdmin + ?Sized> Reconciler<'a, A> {
    pub fn new(admin: &'a A, store: DefinitionStore, options: ReconcileOptions) -> Self {
        Self {
            admin,
            store,
            options,
        }
    }

    /// Reconcile every spec in `catalog`, strictly in order.
    ///
    /// `report` is called once per spec as soon as that spec is done, so
    /// progress is visible even if a later spec fails.
    pub async fn run<F>(
        &self,
        catalog: &IndexCatalog,
        mut report: F,
    ) -> SyncResult<Vec<SpecOutcome>>
    where
        F: FnMut(&SpecOutcome),
    {
        log::info!(
            "Reconciling {} index specs{}",
            catalog.len(),
            if self.options.dry_run { " (dry run)" } else { "" }
        );

        let mut outcomes = Vec::with_capacity(catalog.len());
        for spec in catalog {
            let outcome = self.reconcile_spec(spec).await?;
            log::debug!("{}", outcome);
            report(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Reconcile a single spec.
    pub async fn reconcile_spec(&self, spec: &IndexSpec) -> SyncResult<SpecOutcome> {
        let (existing, listing_error) = self.existing_names(&spec.collection).await;
        let definition = self.store.load(spec)?;

        let exists = existing.iter().any(|name| *name == spec.name);
        let action = Action::decide(exists, self.options.force_recreate);

        if !self.options.dry_run {
            self.apply(spec, action, &definition).await?;
        }

        Ok(SpecOutcome {
            spec: spec.clone(),
            action,
            applied: !self.options.dry_run,
            listing_error,
        })
    }

    /// Live index names, or none plus the reason if the server cannot list
    /// them.
    async fn existing_names(&self, collection: &str) -> (Vec<String>, Option<String>) {
        match self.admin.list_index_names(collection).await {
            Ok(names) => {
                log::debug!("'{}' has search indexes: {:?}", collection, names);
                (names, None)
            }
            Err(e) => {
                log::warn!(
                    "Could not list search indexes on '{}', assuming none exist: {}",
                    collection,
                    e
                );
                (Vec::new(), Some(e.to_string()))
            }
        }
    }

    async fn apply(
        &self,
        spec: &IndexSpec,
        action: Action,
        definition: &IndexDefinition,
    ) -> SyncResult<()> {
        let admin = self.admin;
        match action {
            Action::Create => {
                admin
                    .create_index(&spec.collection, &spec.name, definition)
                    .await
            }
            Action::Update => {
                admin
                    .update_index(&spec.collection, &spec.name, definition)
                    .await
            }
            Action::Recreate => {
                admin.drop_index(&spec.collection, &spec.name).await?;
                admin
                    .create_index(&spec.collection, &spec.name, definition)
                    .await
            }
        }
    }
}

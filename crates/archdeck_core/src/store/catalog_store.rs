//! Validated, indexed catalog storage.
//!
//! # Responsibility
//! - Run every load-time configuration check exactly once.
//! - Own the immutable dataset and its identifier index.
//! - Answer read-only queries the views need (item, group, plan lookups).
//!
//! # Invariants
//! - A `CatalogStore` only exists for datasets that passed validation.
//! - The index is built in `load` and never rebuilt.
//! - Service dependency names are reported, never rejected.

use crate::model::catalog::{
    is_valid_identifier, Catalog, ComparisonRow, Group, Item, Period, PlanEntry, PromptTable,
    ServiceRecord,
};
use crate::store::index::{CatalogIndex, DuplicateItem};
use log::{error, info, warn};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Fatal configuration errors found while loading a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Dataset is not valid catalog JSON.
    Parse(serde_json::Error),
    InvalidGroupId(String),
    InvalidItemId {
        group_id: String,
        item_id: String,
    },
    DuplicateGroupId(String),
    DuplicateItemId {
        item_id: String,
        first_group: String,
        second_group: String,
    },
    /// Period `0` on a group or plan entry.
    InvalidPeriod {
        owner: String,
    },
    DuplicatePlanPeriod(Period),
    /// Group is scheduled in a period that has no plan entry.
    DanglingPeriod {
        group_id: String,
        period: Period,
    },
}

impl CatalogError {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "catalog_parse_failed",
            Self::InvalidGroupId(_) => "invalid_group_id",
            Self::InvalidItemId { .. } => "invalid_item_id",
            Self::DuplicateGroupId(_) => "duplicate_group_id",
            Self::DuplicateItemId { .. } => "duplicate_item_id",
            Self::InvalidPeriod { .. } => "invalid_period",
            Self::DuplicatePlanPeriod(_) => "duplicate_plan_period",
            Self::DanglingPeriod { .. } => "dangling_period",
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "catalog dataset is not valid JSON: {err}"),
            Self::InvalidGroupId(id) => write!(f, "group id is invalid: `{id}`"),
            Self::InvalidItemId { group_id, item_id } => {
                write!(f, "item id is invalid: `{item_id}` in group `{group_id}`")
            }
            Self::DuplicateGroupId(id) => write!(f, "group id is duplicated: `{id}`"),
            Self::DuplicateItemId {
                item_id,
                first_group,
                second_group,
            } => write!(
                f,
                "item id `{item_id}` is duplicated (groups `{first_group}` and `{second_group}`)"
            ),
            Self::InvalidPeriod { owner } => {
                write!(f, "period must be >= 1 (found 0 on {owner})")
            }
            Self::DuplicatePlanPeriod(period) => {
                write!(f, "plan period {period} is defined more than once")
            }
            Self::DanglingPeriod { group_id, period } => write!(
                f,
                "group `{group_id}` is scheduled in period {period}, which has no plan entry"
            ),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<DuplicateItem> for CatalogError {
    fn from(value: DuplicateItem) -> Self {
        Self::DuplicateItemId {
            item_id: value.item_id,
            first_group: value.first_group,
            second_group: value.second_group,
        }
    }
}

/// A service dependency name that matches no service record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedDependency {
    pub service: String,
    pub dependency: String,
}

/// Loaded catalog plus its derived lookup tables.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    index: CatalogIndex,
    plan_by_period: BTreeMap<Period, usize>,
}

impl CatalogStore {
    /// Decodes and loads a JSON dataset.
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let catalog = match Catalog::from_json_str(raw) {
            Ok(catalog) => catalog,
            Err(err) => {
                let err = CatalogError::from(err);
                error!(
                    "event=catalog_load module=store status=error error_code={} error={}",
                    err.code(),
                    err
                );
                return Err(err);
            }
        };
        Self::load(catalog)
    }

    /// Validates the dataset and builds the identifier index.
    ///
    /// # Errors
    /// - Any `CatalogError` variant except `Parse`.
    pub fn load(catalog: Catalog) -> CatalogResult<Self> {
        let started_at = Instant::now();
        match Self::build(catalog) {
            Ok(store) => {
                info!(
                    "event=catalog_load module=store status=ok groups={} items={} services={} plan={} prompts={} duration_ms={}",
                    store.catalog.groups.len(),
                    store.index.len(),
                    store.catalog.services.len(),
                    store.catalog.plan.len(),
                    store.catalog.prompts.is_some(),
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=store status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn build(catalog: Catalog) -> CatalogResult<Self> {
        validate_groups(&catalog.groups)?;
        let index = CatalogIndex::build(&catalog.groups)?;
        let plan_by_period = index_plan(&catalog.plan)?;

        for group in &catalog.groups {
            if let Some(period) = group.period {
                if !plan_by_period.contains_key(&period) {
                    return Err(CatalogError::DanglingPeriod {
                        group_id: group.id.clone(),
                        period,
                    });
                }
            }
        }

        if let Some(prompts) = &catalog.prompts {
            for item_id in prompts.entries.keys() {
                if !index.contains(item_id) {
                    warn!(
                        "event=catalog_prompt_unknown_item module=store status=ignored item_id={}",
                        item_id
                    );
                }
            }
        }

        let store = Self {
            catalog,
            index,
            plan_by_period,
        };

        let unresolved = store.unresolved_dependencies();
        if !unresolved.is_empty() {
            info!(
                "event=catalog_service_dependencies module=store status=unresolved count={}",
                unresolved.len()
            );
        }

        Ok(store)
    }

    pub fn title(&self) -> &str {
        &self.catalog.title
    }

    pub fn groups(&self) -> &[Group] {
        &self.catalog.groups
    }

    pub fn services(&self) -> &[ServiceRecord] {
        &self.catalog.services
    }

    /// Plan entries in dataset order.
    pub fn plan(&self) -> &[PlanEntry] {
        &self.catalog.plan
    }

    pub fn comparison(&self) -> &[ComparisonRow] {
        &self.catalog.comparison
    }

    pub fn prompts(&self) -> Option<&PromptTable> {
        self.catalog.prompts.as_ref()
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn item_count(&self) -> usize {
        self.index.len()
    }

    /// Looks up an item by identifier. Unknown identifiers return `None`.
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.index.resolve(&self.catalog.groups, item_id)
    }

    /// Returns the group owning `item_id`.
    pub fn group_of(&self, item_id: &str) -> Option<&Group> {
        let location = self.index.locate(item_id)?;
        self.catalog.groups.get(location.group)
    }

    pub fn plan_entry(&self, period: Period) -> Option<&PlanEntry> {
        let position = *self.plan_by_period.get(&period)?;
        self.catalog.plan.get(position)
    }

    /// Items of every group scheduled in `period`, in catalog order.
    pub fn items_for_period(&self, period: Period) -> Vec<&Item> {
        self.catalog
            .groups
            .iter()
            .filter(|group| group.period == Some(period))
            .flat_map(|group| group.items.iter())
            .collect()
    }

    /// Dependency names with no service record of exactly that name.
    pub fn unresolved_dependencies(&self) -> Vec<UnresolvedDependency> {
        let known: HashSet<&str> = self
            .catalog
            .services
            .iter()
            .map(|service| service.name.as_str())
            .collect();

        self.catalog
            .services
            .iter()
            .flat_map(|service| {
                service
                    .depends_on
                    .iter()
                    .filter(|dependency| !known.contains(dependency.as_str()))
                    .map(|dependency| UnresolvedDependency {
                        service: service.name.clone(),
                        dependency: dependency.clone(),
                    })
            })
            .collect()
    }
}

fn validate_groups(groups: &[Group]) -> CatalogResult<()> {
    let mut seen = BTreeSet::<&str>::new();
    for group in groups {
        if !is_valid_identifier(&group.id) {
            return Err(CatalogError::InvalidGroupId(group.id.clone()));
        }
        if !seen.insert(group.id.as_str()) {
            return Err(CatalogError::DuplicateGroupId(group.id.clone()));
        }
        if group.period == Some(0) {
            return Err(CatalogError::InvalidPeriod {
                owner: format!("group `{}`", group.id),
            });
        }
        if let Some(item) = group.items.iter().find(|item| !is_valid_identifier(&item.id)) {
            return Err(CatalogError::InvalidItemId {
                group_id: group.id.clone(),
                item_id: item.id.clone(),
            });
        }
    }
    Ok(())
}

fn index_plan(plan: &[PlanEntry]) -> CatalogResult<BTreeMap<Period, usize>> {
    let mut by_period = BTreeMap::new();
    for (position, entry) in plan.iter().enumerate() {
        if entry.period == 0 {
            return Err(CatalogError::InvalidPeriod {
                owner: format!("plan entry `{}`", entry.title),
            });
        }
        if by_period.insert(entry.period, position).is_some() {
            return Err(CatalogError::DuplicatePlanPeriod(entry.period));
        }
    }
    Ok(by_period)
}

//! Rebuilding a loadout from an unordered set of commands.
//!
//! A stored loadout is a flat bag of facts ("an engine", "six heat sinks",
//! "double heat sinks") without the order the editing session applied them in.
//! Applied naively, later facts can fail spuriously: heat sinks added before
//! the engine are not absorbed, stealth armour set before the ECM is refused.
//!
//! [`LoadoutBuilder`] stable-sorts commands by their [`priority`](super::priority)
//! and applies them one by one. A failing command is recorded as a
//! [`CommandFault`] and the batch continues.

use core::fmt;

use crate::catalog::{Catalog, ChassisId};
use crate::error::{ErrorSeverity, MechlabError};
use crate::state::{Loadout, LoadoutError};

use super::{Command, LoadoutCommand};

/// A command that could not be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandFault {
    /// Position of the command in submission order.
    pub index: usize,
    pub description: String,
    pub error: LoadoutError,
}

impl fmt::Display for CommandFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.error)
    }
}

/// Outcome of [`LoadoutBuilder::apply_all`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Submission indices of applied commands, in application order.
    pub applied: Vec<usize>,
    /// Failed commands, in application order.
    pub faults: Vec<CommandFault>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.faults.is_empty()
    }

    /// Highest severity among the faults.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        self.faults.iter().map(|fault| fault.error.severity()).max()
    }

    /// One message listing every fault, or `None` if everything applied.
    pub fn summary(&self) -> Option<String> {
        if self.faults.is_empty() {
            return None;
        }
        let lines: Vec<String> = self.faults.iter().map(|f| format!("  - {f}")).collect();
        Some(format!("Could not restore:\n{}", lines.join("\n")))
    }
}

/// Collects commands and applies them in dependency order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadoutBuilder {
    commands: Vec<Command>,
}

impl LoadoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: impl Into<Command>) -> &mut Self {
        self.commands.push(command.into());
        self
    }

    pub fn with(mut self, command: impl Into<Command>) -> Self {
        self.push(command);
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Submission indices in application order.
    ///
    /// Sorting is stable: commands of equal priority keep submission order.
    pub fn schedule(&self, catalog: &Catalog) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.commands.len()).collect();
        order.sort_by_key(|&index| self.commands[index].priority(catalog));
        order
    }

    /// Applies every command to `loadout` in scheduled order.
    pub fn apply_all(&self, loadout: &mut Loadout<'_>) -> BuildReport {
        let catalog = loadout.catalog();
        let mut report = BuildReport::default();

        for index in self.schedule(catalog) {
            let command = &self.commands[index];
            match command.apply(loadout) {
                Ok(()) => {
                    tracing::debug!(index, command = %command.describe(catalog), "command applied");
                    report.applied.push(index);
                }
                Err(error) => {
                    let description = command.describe(catalog);
                    tracing::warn!(
                        index,
                        command = %description,
                        code = error.error_code(),
                        %error,
                        "command failed"
                    );
                    report.faults.push(CommandFault {
                        index,
                        description,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            loadout = loadout.name(),
            applied = report.applied.len(),
            faults = report.faults.len(),
            "loadout rebuilt"
        );
        report
    }

    /// Creates an empty loadout of `chassis` and applies every command to it.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::Catalog` if the chassis cannot be instantiated.
    /// Individual command failures are reported, not returned.
    pub fn build<'c>(
        &self,
        catalog: &'c Catalog,
        chassis: ChassisId,
    ) -> Result<(Loadout<'c>, BuildReport), LoadoutError> {
        let mut loadout = Loadout::new(catalog, chassis)?;
        let report = self.apply_all(&mut loadout);
        Ok((loadout, report))
    }
}

impl Extend<Command> for LoadoutBuilder {
    fn extend<T: IntoIterator<Item = Command>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

impl FromIterator<Command> for LoadoutBuilder {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArmourSide, Location, UpgradeId};
    use crate::command::{AddItem, Rename, SetArmour, SetHeatSinkType};
    use crate::equip::EquipResultKind;
    use crate::test_support::{self, *};

    #[test]
    fn equal_priorities_keep_submission_order() {
        let catalog = test_support::catalog();
        let builder = LoadoutBuilder::new()
            .with(AddItem::new(MEDIUM_LASER, None))
            .with(Rename::new("first"))
            .with(AddItem::new(HEAT_SINK, None))
            .with(Rename::new("second"));

        assert_eq!(builder.schedule(&catalog), vec![1, 3, 0, 2]);
    }

    #[test]
    fn engine_is_placed_before_heat_sinks() {
        let catalog = test_support::catalog();
        let builder = LoadoutBuilder::new()
            .with(AddItem::new(HEAT_SINK, None))
            .with(AddItem::new(HEAT_SINK, None))
            .with(AddItem::new(STD_ENGINE_300, None));

        let (loadout, report) = builder.build(&catalog, STANDARD_CHASSIS).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.applied, vec![2, 0, 1]);
        assert_eq!(loadout.component(Location::CenterTorso).absorbed_heat_sinks(), 2);
    }

    #[test]
    fn faults_do_not_abort_the_batch() {
        let catalog = test_support::catalog();
        let builder = LoadoutBuilder::new()
            .with(SetArmour::new(Location::Head, ArmourSide::Front, 5, true))
            .with(AddItem::new(STD_ENGINE_300, None))
            .with(AddItem::new(XL_ENGINE_300, None))
            .with(Rename::new("Partial"));

        let (loadout, report) = builder.build(&catalog, STANDARD_CHASSIS).unwrap();
        assert_eq!(loadout.name(), "Partial");
        assert_eq!(report.faults.len(), 2);
        assert_eq!(report.faults[0].index, 2);
        assert_eq!(report.faults[1].index, 0);
        assert_eq!(
            report.faults[0].error.equip_result().map(|r| r.kind),
            Some(EquipResultKind::EngineAlreadyEquipped)
        );
        assert_eq!(report.severity(), Some(ErrorSeverity::Validation));

        let summary = report.summary().unwrap();
        assert!(summary.starts_with("Could not restore:"));
        assert!(summary.contains("An engine is already equipped."));
    }

    #[test]
    fn unknown_ids_become_faults() {
        let catalog = test_support::catalog();
        let builder = LoadoutBuilder::new().with(SetHeatSinkType::new(UpgradeId(404)));
        let (_, report) = builder.build(&catalog, STANDARD_CHASSIS).unwrap();
        assert_eq!(report.faults[0].error.error_code(), "CATALOG_UNKNOWN_UPGRADE");
    }
}

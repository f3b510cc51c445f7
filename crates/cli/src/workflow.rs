//! One catering session: load, gather, assign, report, save.
//!
//! Registry failures (unknown guest, sold-out menu, unreadable state) are
//! reported to the operator and logged; they never stop the session. Only
//! console I/O failures propagate.

use std::io::Write;

use anyhow::Context;
use chrono::Utc;

use catering_infra::StateStore;
use catering_registry::{CateringRegistry, ReassignPolicy};

use crate::input::InputCollector;
use crate::report;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Run the reassignment round after the initial assignments.
    pub reassign_prompt: bool,
}

/// Outcome counts for one session.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub menus_added: usize,
    pub guests_added: usize,
    pub assigned: usize,
    pub reassigned: usize,
    /// Guests who picked the menu they already had.
    pub kept: usize,
    pub failed: usize,
}

/// Load the saved registry, falling back to an empty one.
///
/// Absent, unreadable and inconsistent state all mean a fresh start.
pub fn load_registry(store: &impl StateStore, policy: ReassignPolicy) -> CateringRegistry {
    let snapshot = match store.load() {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            tracing::info!("starting with an empty registry");
            return CateringRegistry::with_policy(policy);
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not load saved state; starting with an empty registry");
            return CateringRegistry::with_policy(policy);
        }
    };

    match CateringRegistry::from_snapshot(snapshot) {
        Ok(mut registry) => {
            registry.set_policy(policy);
            registry
        }
        Err(err) => {
            tracing::warn!(error = %err, "saved state is inconsistent; starting with an empty registry");
            CateringRegistry::with_policy(policy)
        }
    }
}

/// Persist the registry. Failure is reported, not fatal.
pub fn save_registry(
    store: &impl StateStore,
    registry: &CateringRegistry,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match store.save(&registry.snapshot(Utc::now())) {
        Ok(()) => {
            writeln!(out, "Data saved.")?;
            Ok(true)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to save registry state");
            writeln!(out, "Could not save data: {err}")?;
            Ok(false)
        }
    }
}

/// Gather menus, guests and choices from `input`, apply them, and print the
/// reports to `out`.
pub fn run_session(
    registry: &mut CateringRegistry,
    input: &mut impl InputCollector,
    out: &mut impl Write,
    options: SessionOptions,
) -> anyhow::Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    gather_menus(registry, input, out, &mut summary)?;
    gather_guests(registry, input, out, &mut summary)?;
    assign_guests(registry, input, out, &mut summary)?;
    if options.reassign_prompt {
        reassign_guests(registry, input, out, &mut summary)?;
    }

    report::write_assignments(out, &registry.list_assignments())
        .context("failed to write assignment report")?;
    report::write_availability(out, &registry.remaining_availability())
        .context("failed to write availability report")?;

    tracing::info!(
        menus_added = summary.menus_added,
        guests_added = summary.guests_added,
        assigned = summary.assigned,
        reassigned = summary.reassigned,
        kept = summary.kept,
        failed = summary.failed,
        "session complete"
    );
    Ok(summary)
}

fn gather_menus(
    registry: &mut CateringRegistry,
    input: &mut impl InputCollector,
    out: &mut impl Write,
    summary: &mut SessionSummary,
) -> anyhow::Result<()> {
    let drafts = input.collect_menus().context("failed to read menu options")?;

    for draft in drafts {
        let name = draft.name.clone();
        tracing::debug!(menu = %name, capacity = draft.capacity, "adding menu");
        if registry.add_menu(draft.name, draft.capacity, draft.dishes).is_some() {
            tracing::warn!(menu = %name, "menu replaced an existing entry");
            writeln!(out, "Menu '{name}' replaced an existing menu with the same name.")?;
        }
        summary.menus_added += 1;
    }
    Ok(())
}

fn gather_guests(
    registry: &mut CateringRegistry,
    input: &mut impl InputCollector,
    out: &mut impl Write,
    summary: &mut SessionSummary,
) -> anyhow::Result<()> {
    let guests = input.collect_guests().context("failed to read guests")?;

    for guest in guests {
        let name = guest.clone();
        if registry.add_guest(guest).is_some() {
            tracing::warn!(guest = %name, "guest replaced an existing entry");
            writeln!(out, "Guest '{name}' replaced an existing guest with the same name.")?;
        }
        summary.guests_added += 1;
    }
    Ok(())
}

fn assign_guests(
    registry: &mut CateringRegistry,
    input: &mut impl InputCollector,
    out: &mut impl Write,
    summary: &mut SessionSummary,
) -> anyhow::Result<()> {
    let guests: Vec<_> = registry.guests().map(|g| g.name().clone()).collect();

    for guest in guests {
        let menu = input
            .choose_menu(&guest)
            .with_context(|| format!("failed to read menu choice for {guest}"))?;

        let current = registry.guest(guest.as_str()).and_then(|g| g.assigned_menu());
        if current.is_some_and(|m| m.as_str() == menu.trim()) {
            tracing::debug!(guest = %guest, menu = %menu, "menu unchanged");
            writeln!(out, "{guest} keeps menu '{menu}'.")?;
            summary.kept += 1;
            continue;
        }

        match registry.assign_menu(guest.as_str(), &menu) {
            Ok(()) => {
                tracing::debug!(guest = %guest, menu = %menu, "menu assigned");
                writeln!(out, "Menu assigned to {guest}.")?;
                summary.assigned += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, "assignment failed");
                writeln!(out, "{err}")?;
                summary.failed += 1;
            }
        }
    }
    Ok(())
}

fn reassign_guests(
    registry: &mut CateringRegistry,
    input: &mut impl InputCollector,
    out: &mut impl Write,
    summary: &mut SessionSummary,
) -> anyhow::Result<()> {
    while let Some((guest, menu)) = input
        .next_reassignment()
        .context("failed to read reassignment")?
    {
        match registry.reassign_menu(&guest, &menu) {
            Ok(()) => {
                tracing::debug!(guest = %guest, menu = %menu, "menu reassigned");
                writeln!(out, "Menu updated for {guest}.")?;
                summary.reassigned += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, policy = %registry.policy(), "reassignment failed");
                writeln!(out, "{err}")?;
                summary.failed += 1;
            }
        }
    }
    Ok(())
}

//! Per-session province and district selection.
//!
//! Each selected province carries its own district sub-state: either the
//! "all districts" shortcut or an explicit pick set. Removing a province
//! drops that sub-state with it, so re-selecting the same province always
//! starts clean.

use std::collections::HashMap;

use crate::model::geo;

/// District scope for one selected province.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistrictChoice {
    /// Every district of the province is in scope.
    AllDistricts,
    /// An explicit subset of the province's districts.
    Explicit(Vec<String>),
}

/// Which provinces are selected, and which districts within each.
///
/// Invariant: a province has a [`DistrictChoice`] entry iff it appears in
/// the selected-province list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selected provinces in the order the user added them.
    provinces: Vec<String>,
    choices: HashMap<String, DistrictChoice>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected provinces in selection order.
    pub fn selected_provinces(&self) -> &[String] {
        &self.provinces
    }

    /// Returns `true` if `province` is currently selected.
    pub fn is_selected(&self, province: &str) -> bool {
        self.provinces.iter().any(|p| p == province)
    }

    /// Adds a province to the selection with an empty explicit pick set.
    ///
    /// Adding an already-selected province is a no-op, preserving its
    /// existing district sub-state.
    pub fn add_province(&mut self, province: &str) {
        if self.is_selected(province) {
            return;
        }
        self.provinces.push(province.to_string());
        self.choices
            .insert(province.to_string(), DistrictChoice::Explicit(Vec::new()));
    }

    /// Removes a province and discards its district sub-state.
    pub fn remove_province(&mut self, province: &str) {
        self.provinces.retain(|p| p != province);
        self.choices.remove(province);
    }

    /// Adds the province if unselected, removes it otherwise.
    pub fn toggle_province(&mut self, province: &str) {
        if self.is_selected(province) {
            self.remove_province(province);
        } else {
            self.add_province(province);
        }
    }

    /// Returns `true` if the province's all-districts shortcut is on.
    pub fn all_districts_on(&self, province: &str) -> bool {
        matches!(self.choices.get(province), Some(DistrictChoice::AllDistricts))
    }

    /// Switches a selected province between all-districts and explicit mode.
    ///
    /// Leaving all-districts mode returns to an empty explicit pick set;
    /// prior picks do not survive the round trip. No-op for unselected
    /// provinces.
    pub fn toggle_all_districts(&mut self, province: &str) {
        let Some(choice) = self.choices.get_mut(province) else {
            return;
        };
        *choice = match choice {
            DistrictChoice::AllDistricts => DistrictChoice::Explicit(Vec::new()),
            DistrictChoice::Explicit(_) => DistrictChoice::AllDistricts,
        };
    }

    /// Toggles one explicit district pick for a selected province.
    ///
    /// Ignored while the province is in all-districts mode (the explicit
    /// control is hidden there) or when the province is not selected.
    pub fn toggle_district(&mut self, province: &str, district: &str) {
        let Some(DistrictChoice::Explicit(picks)) = self.choices.get_mut(province) else {
            return;
        };
        if let Some(pos) = picks.iter().position(|d| d == district) {
            picks.remove(pos);
        } else {
            picks.push(district.to_string());
        }
    }

    /// Returns `true` if `district` is explicitly picked for `province`.
    pub fn is_district_picked(&self, province: &str, district: &str) -> bool {
        match self.choices.get(province) {
            Some(DistrictChoice::Explicit(picks)) => picks.iter().any(|d| d == district),
            _ => false,
        }
    }

    /// Flattens the selection into a district list.
    ///
    /// Provinces contribute in selection order; within a province districts
    /// follow catalog order, so the result is stable regardless of the order
    /// picks were made in.
    pub fn selected_districts(&self) -> Vec<String> {
        let mut out = Vec::new();
        for province in &self.provinces {
            match self.choices.get(province) {
                Some(DistrictChoice::AllDistricts) => {
                    out.extend(geo::districts_of(province).iter().map(|d| d.to_string()));
                }
                Some(DistrictChoice::Explicit(picks)) => {
                    for district in geo::districts_of(province) {
                        if picks.iter().any(|p| p == district) {
                            out.push((*district).to_string());
                        }
                    }
                }
                None => {}
            }
        }
        out
    }

    /// Returns `true` if no province is selected.
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    /// Discards every province and all per-province sub-state.
    pub fn clear(&mut self) {
        self.provinces.clear();
        self.choices.clear();
    }
}

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Modifier, Prompt, Rule};
use crate::session::{self, SessionRule};
use crate::spin::{self, SpinOutcome, SpinPhysics};

/// Static color profile for one segment kind.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SegmentStyle {
    pub fill: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WheelItemKind {
    Rule,
    Prompt,
    Modifier,
    End,
}

/// Snapshot of the card behind a segment. Copied out of the catalog at
/// population time, so later session changes never rewrite a live wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WheelItemData {
    Rule(Rule),
    Prompt(Prompt),
    Modifier(Modifier),
    End,
}

/// One physical slot on the wheel. `id` is unique within a wheel layout.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WheelItem {
    pub id: String,
    pub kind: WheelItemKind,
    pub label: String,
    pub data: WheelItemData,
    pub style: SegmentStyle,
}

impl WheelItem {
    /// The placeholder a slot turns into once its card has been played.
    /// The id keeps the original id as provenance; the transition is one-way.
    fn end_marker(original_id: &str) -> Self {
        Self {
            id: format!("{}{}", USED_ID_PREFIX, original_id),
            kind: WheelItemKind::End,
            label: "END".to_string(),
            data: WheelItemData::End,
            style: END_STYLE,
        }
    }
}

/// Builds a fresh wheel layout from the session rules and the catalog.
///
/// Segment counts follow the fixed ratios: prompts and rules floor, and
/// modifiers absorb the rounding remainder. Each source list is shuffled
/// and drawn cyclically, so a catalog smaller than its share still fills
/// the wheel with locally shuffled repeats. An empty category is simply
/// omitted rather than treated as an error.
pub fn populate_wheel(
    session_rules: &[SessionRule],
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Vec<WheelItem> {
    let num_prompts = (TOTAL_SEGMENTS as f64 * PROMPT_RATIO).floor() as usize;
    let num_rules = (TOTAL_SEGMENTS as f64 * RULE_RATIO).floor() as usize;
    let num_modifiers = TOTAL_SEGMENTS - num_prompts - num_rules;

    let mut items = Vec::with_capacity(TOTAL_SEGMENTS);

    let mut prompts = catalog.prompts.clone();
    prompts.shuffle(rng);
    if !prompts.is_empty() {
        for i in 0..num_prompts {
            let prompt = &prompts[i % prompts.len()];
            items.push(WheelItem {
                id: format!("prompt-{}-{}", i, prompt.id),
                kind: WheelItemKind::Prompt,
                label: prompt.text.clone(),
                data: WheelItemData::Prompt(prompt.clone()),
                style: PROMPT_STYLE,
            });
        }
    }

    let mut active_rules: Vec<Rule> = session_rules
        .iter()
        .map(|rule| rule.active_rule().clone())
        .collect();
    active_rules.shuffle(rng);
    if !active_rules.is_empty() {
        for i in 0..num_rules {
            let rule = &active_rules[i % active_rules.len()];
            items.push(WheelItem {
                id: format!("rule-{}-{}", i, rule.id),
                kind: WheelItemKind::Rule,
                label: rule.name.clone(),
                data: WheelItemData::Rule(rule.clone()),
                style: RULE_STYLE,
            });
        }
    }

    let mut modifiers = catalog.modifiers.clone();
    modifiers.shuffle(rng);
    if !modifiers.is_empty() {
        for i in 0..num_modifiers {
            let modifier = &modifiers[i % modifiers.len()];
            items.push(WheelItem {
                id: format!("modifier-{}-{}", i, modifier.id),
                kind: WheelItemKind::Modifier,
                label: modifier.name.clone(),
                data: WheelItemData::Modifier(modifier.clone()),
                style: MODIFIER_STYLE,
            });
        }
    }

    // Final shuffle so segment kinds are spread around the wheel.
    items.shuffle(rng);
    items
}

/// Authoritative wheel state for one game session: the full slot layout,
/// the subset still eligible for selection, and the spin lifecycle.
#[derive(Debug, Serialize, Clone)]
pub struct WheelGame {
    pub session_rules: Vec<SessionRule>,
    pub segments: Vec<WheelItem>,
    pub available: Vec<WheelItem>,
    pub rotation: f64,
    pub spin_count: u32,
    pub is_spinning: bool,
    pub pending: Option<String>,
}

impl WheelGame {
    pub fn new(catalog: &Catalog, rng: &mut impl Rng) -> Self {
        let session_rules = session::session_rules(catalog);
        let segments = populate_wheel(&session_rules, catalog, rng);
        Self {
            session_rules,
            available: segments.clone(),
            segments,
            rotation: 0.0,
            spin_count: 0,
            is_spinning: false,
            pending: None,
        }
    }

    /// Starts the session over with a fresh deck and unflipped rules.
    /// The wheel stays at its current angle.
    pub fn reset(&mut self, catalog: &Catalog, rng: &mut impl Rng) {
        self.session_rules = session::session_rules(catalog);
        self.segments = populate_wheel(&self.session_rules, catalog, rng);
        self.available = self.segments.clone();
        self.spin_count = 0;
        self.is_spinning = false;
        self.pending = None;
    }

    /// Toggles a rule group to its other side and regenerates the layout,
    /// since wheel items hold snapshots of the rule that was active when
    /// they were drawn.
    ///
    /// Reconciliation is best effort: any regenerated item whose id matches
    /// a previously used slot (after stripping the used-id prefix) stays out
    /// of the available pool, but the reshuffled draws mean the used-slot
    /// set is not guaranteed to carry over exactly.
    pub fn flip_rule(&mut self, rule_id: u32, catalog: &Catalog, rng: &mut impl Rng) -> bool {
        let Some(rule) = self.session_rules.iter_mut().find(|r| r.id == rule_id) else {
            log::warn!("Flip ignored: no session rule with id {}", rule_id);
            return false;
        };
        rule.toggle();

        let used: Vec<String> = self
            .segments
            .iter()
            .filter(|item| item.kind == WheelItemKind::End)
            .filter_map(|item| item.id.strip_prefix(USED_ID_PREFIX))
            .map(str::to_owned)
            .collect();

        self.segments = populate_wheel(&self.session_rules, catalog, rng);
        self.available = self
            .segments
            .iter()
            .filter(|item| !used.contains(&item.id))
            .cloned()
            .collect();
        true
    }

    /// Resolves a gesture into a committed spin: picks the winner, computes
    /// the rotation target, and arms the spin guard. Returns `None` without
    /// touching any state when a spin is already running or nothing is
    /// selectable; that silent no-op is deliberate.
    ///
    /// The returned rotation is final the moment this commits. The caller
    /// animates toward it and then reports back via [`finish_spin`].
    ///
    /// [`finish_spin`]: WheelGame::finish_spin
    pub fn spin(&mut self, velocity: f64, rng: &mut impl Rng) -> Option<SpinOutcome> {
        if self.is_spinning {
            log::info!("Spin ignored: a spin is already in progress");
            return None;
        }
        if self.segments.is_empty() {
            log::info!("Spin ignored: the wheel has no segments");
            return None;
        }
        let target = match spin::pick_candidate(&self.available, self.spin_count, rng) {
            Some(item) => item.clone(),
            None => {
                log::info!("Spin ignored: nothing left to select");
                return None;
            }
        };
        let Some(target_index) = self.segments.iter().position(|item| item.id == target.id)
        else {
            log::error!("Selected item {} is missing from the wheel layout", target.id);
            return None;
        };

        let physics = SpinPhysics::from_velocity(velocity);
        let segment_angle = 360.0 / self.segments.len() as f64;
        let jitter = spin::landing_jitter(segment_angle, rng);
        let rotation_delta =
            spin::rotation_delta(self.rotation, self.segments.len(), target_index, &physics, jitter);
        let new_rotation = self.rotation + rotation_delta;

        self.rotation = new_rotation;
        self.is_spinning = true;
        self.pending = Some(target.id.clone());
        self.spin_count += 1;

        Some(SpinOutcome {
            item: target,
            target_index,
            rotation_delta,
            new_rotation,
            duration_ms: physics.duration_ms,
        })
    }

    /// Animation-complete callback, expected exactly once per committed
    /// spin. Consumes the pending winner and returns it for result display.
    /// A call with no spin in flight returns `None`.
    pub fn finish_spin(&mut self) -> Option<WheelItem> {
        let pending = self.pending.take()?;
        self.is_spinning = false;
        let winner = self.segments.iter().find(|item| item.id == pending).cloned();
        self.consume(&pending);
        winner
    }

    /// Retires a played card: the slot keeps its position but becomes an
    /// END placeholder, and the id leaves the available pool. Idempotent
    /// per id. An id the wheel has never seen is a logic fault, since
    /// selection and consumption must always agree.
    pub fn consume(&mut self, item_id: &str) -> bool {
        let Some(index) = self.segments.iter().position(|item| item.id == item_id) else {
            let used_id = format!("{}{}", USED_ID_PREFIX, item_id);
            if self.segments.iter().any(|item| item.id == used_id) {
                return true;
            }
            log::error!("Consume failed: item {} is not on the wheel", item_id);
            return false;
        };
        self.segments[index] = WheelItem::end_marker(item_id);
        self.available.retain(|item| item.id != item_id);
        true
    }
}

/// Total number of segments on a populated wheel
pub const TOTAL_SEGMENTS: usize = 20;
/// Share of the wheel given to prompt cards
pub const PROMPT_RATIO: f64 = 0.5;
/// Share of the wheel given to rule cards; modifiers absorb the remainder
pub const RULE_RATIO: f64 = 0.3;
/// Prefix marking the placeholder id of a consumed slot
pub const USED_ID_PREFIX: &str = "used-";

pub const RULE_STYLE: SegmentStyle = SegmentStyle { fill: "#f97316", text: "#ffffff" };
pub const PROMPT_STYLE: SegmentStyle = SegmentStyle { fill: "#06b6d4", text: "#ffffff" };
pub const MODIFIER_STYLE: SegmentStyle = SegmentStyle { fill: "#ec4899", text: "#ffffff" };
pub const END_STYLE: SegmentStyle = SegmentStyle { fill: "#374151", text: "#9ca3af" };

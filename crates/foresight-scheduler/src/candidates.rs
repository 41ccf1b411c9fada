//! Category → concrete speculative work on the current page.

use std::cmp::Ordering;

use foresight_core::config::SchedulerConfig;
use foresight_core::models::{
    BehaviorCategory, Destination, LinkElement, MediaKind, PageSnapshot, ResourceSpec,
    VisibleElement,
};
use foresight_core::ActionKind;

use crate::link_priority::link_priority;

/// One resource the scheduler may act on.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub resource_key: String,
    pub category: BehaviorCategory,
    pub kind: ActionKind,
    pub confidence: f64,
}

impl Candidate {
    fn new(
        resource_key: impl Into<String>,
        category: BehaviorCategory,
        kind: ActionKind,
        confidence: f64,
    ) -> Self {
        Self {
            resource_key: resource_key.into(),
            category,
            kind,
            confidence,
        }
    }

    fn preload(spec: &ResourceSpec, category: BehaviorCategory, confidence: f64) -> Self {
        Self::new(
            spec.url.as_str(),
            category,
            ActionKind::Preload {
                destination: spec.destination,
                priority: spec.priority,
            },
            confidence,
        )
    }
}

/// Key under which a warmed component is tracked.
pub fn component_key(component: &str) -> String {
    format!("component:{component}")
}

/// Resolves behavior categories against a page snapshot and the configured
/// static resource lists.
#[derive(Debug, Clone)]
pub struct CandidateResolver {
    config: SchedulerConfig,
}

impl CandidateResolver {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn resolve(
        &self,
        category: BehaviorCategory,
        confidence: f64,
        page: &PageSnapshot,
    ) -> Vec<Candidate> {
        match category {
            BehaviorCategory::Navigation => self.navigation(confidence, page),
            BehaviorCategory::Search => {
                if page.has_search_elements {
                    self.preloads(&self.config.resources.search, category, confidence)
                } else {
                    Vec::new()
                }
            }
            BehaviorCategory::Details => self.details(confidence, page),
            BehaviorCategory::Contact => {
                self.preloads(&self.config.resources.contact, category, confidence)
            }
            BehaviorCategory::Media => self.media(confidence, page),
            BehaviorCategory::Form => self.forms(confidence, page),
            BehaviorCategory::Social => {
                self.preloads(&self.config.resources.social, category, confidence)
            }
            BehaviorCategory::Exit => self.preloads(&self.config.resources.exit, category, confidence),
        }
    }

    /// Work for an element that became significantly visible: warm its
    /// component, prefetch its data endpoint and its high-priority links.
    pub fn resolve_visible(&self, element: &VisibleElement) -> Vec<Candidate> {
        if element.intersection_ratio <= self.config.visibility_ratio_threshold {
            return Vec::new();
        }
        let confidence = element.intersection_ratio.clamp(0.0, 1.0);
        let mut candidates = Vec::new();

        if let Some(component) = element.component.as_deref().filter(|c| !c.is_empty()) {
            candidates.push(Candidate::new(
                component_key(component),
                BehaviorCategory::Details,
                ActionKind::WarmCache,
                confidence,
            ));
        }
        if let Some(api) = element.api.as_deref().filter(|a| !a.is_empty()) {
            candidates.push(Candidate::new(
                api,
                BehaviorCategory::Details,
                ActionKind::Prefetch {
                    destination: Destination::Data,
                },
                confidence,
            ));
        }
        for link in &element.links {
            if link_priority(link) > self.config.link_priority_threshold {
                candidates.push(Candidate::new(
                    link.href.as_str(),
                    BehaviorCategory::Navigation,
                    ActionKind::Prefetch {
                        destination: Destination::Document,
                    },
                    confidence,
                ));
            }
        }
        candidates
    }

    fn navigation(&self, confidence: f64, page: &PageSnapshot) -> Vec<Candidate> {
        let mut ranked: Vec<(&LinkElement, f64)> = page
            .links
            .iter()
            .filter(|link| link.same_origin && !link.href.is_empty())
            .filter(|link| link.rect.is_visible(page.viewport_width, page.viewport_height))
            .map(|link| (link, link_priority(link)))
            .filter(|(_, priority)| *priority > self.config.link_priority_threshold)
            .collect();
        // Stable: equal priorities keep document order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        ranked
            .into_iter()
            .take(self.config.navigation_top_n)
            .map(|(link, _)| {
                Candidate::new(
                    link.href.as_str(),
                    BehaviorCategory::Navigation,
                    ActionKind::Prerender,
                    confidence,
                )
            })
            .collect()
    }

    fn details(&self, confidence: f64, page: &PageSnapshot) -> Vec<Candidate> {
        page.detail_items
            .iter()
            .filter(|item| item.rect.is_visible(page.viewport_width, page.viewport_height))
            .filter_map(|item| item.detail_url.as_deref().filter(|url| !url.is_empty()))
            .take(self.config.details_top_n)
            .map(|url| Candidate::new(url, BehaviorCategory::Details, ActionKind::Prerender, confidence))
            .collect()
    }

    fn media(&self, confidence: f64, page: &PageSnapshot) -> Vec<Candidate> {
        let margin = self.config.near_viewport_margin_px;
        page.media
            .iter()
            .filter(|m| !m.src.is_empty())
            .filter(|m| m.rect.is_near_viewport(page.viewport_width, page.viewport_height, margin))
            .take(self.config.media_top_n)
            .map(|m| {
                let destination = match m.kind {
                    MediaKind::Image => Destination::Image,
                    MediaKind::Video => Destination::Video,
                };
                Candidate::new(
                    m.src.as_str(),
                    BehaviorCategory::Media,
                    ActionKind::Prefetch { destination },
                    confidence,
                )
            })
            .collect()
    }

    fn forms(&self, confidence: f64, page: &PageSnapshot) -> Vec<Candidate> {
        let margin = self.config.near_viewport_margin_px;
        let resources = &self.config.resources;
        let mut candidates = Vec::new();
        for form in page.forms.iter().filter(|f| f.is_async) {
            if !form.rect.is_near_viewport(page.viewport_width, page.viewport_height, margin) {
                continue;
            }
            if form.has_validation {
                candidates.extend(self.preloads(&resources.form_validation, BehaviorCategory::Form, confidence));
            }
            candidates.extend(self.preloads(&resources.form_async, BehaviorCategory::Form, confidence));
        }
        candidates
    }

    fn preloads(
        &self,
        specs: &[ResourceSpec],
        category: BehaviorCategory,
        confidence: f64,
    ) -> Vec<Candidate> {
        specs
            .iter()
            .map(|spec| Candidate::preload(spec, category, confidence))
            .collect()
    }
}

/// Collapse candidates sharing a resource key, keeping the most confident.
/// First-seen order is preserved.
pub fn merge_by_key(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut merged: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match merged
            .iter_mut()
            .find(|existing| existing.resource_key == candidate.resource_key)
        {
            Some(existing) if candidate.confidence > existing.confidence => *existing = candidate,
            Some(_) => {}
            None => merged.push(candidate),
        }
    }
    merged
}

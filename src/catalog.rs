//! Fixed catalog of notification templates.
//!
//! Single source of truth for every notification the hub can emit. Templates
//! omit id, timestamp, and status; those are stamped at emission time by
//! [`EventTemplate::instantiate`]. Lookup by title fragment exists only for
//! deterministic triggering (tests and demos).

use chrono::Utc;
use uuid::Uuid;

use crate::event::{AgentEvent, CallToAction, EventKind, EventStatus, Severity};

#[derive(Debug, Clone, Copy)]
pub struct EventTemplate {
    pub kind: EventKind,
    pub severity: Option<Severity>,
    pub title: &'static str,
    pub body: &'static str,
    pub cta: Option<(&'static str, &'static str)>,
}

pub const TEMPLATES: &[EventTemplate] = &[
    EventTemplate {
        kind: EventKind::Alert,
        severity: Some(Severity::High),
        title: "Margem caiu 2,1pp na BU Sul",
        body: "A margem bruta da unidade Sul apresentou queda significativa. Principais fatores: aumento de custo e desconto promocional.",
        cta: Some(("Abrir Pricing", "/colony/pricing-margin?bu=Sul")),
    },
    EventTemplate {
        kind: EventKind::Insight,
        severity: Some(Severity::Medium),
        title: "DSO subiu para 54 dias",
        body: "O prazo médio de recebimento aumentou 8% no último mês. Concentração em clientes categoria B e C.",
        cta: Some(("Ver AP/AR", "/colony/ap-ar?sort=days_overdue")),
    },
    EventTemplate {
        kind: EventKind::Alert,
        severity: Some(Severity::High),
        title: "Burn rate crítico detectado",
        body: "Taxa de queima atual de R$ 180k/mês com runway de apenas 9 meses. Revisão urgente necessária.",
        cta: Some(("Ver Fluxo de Caixa", "/colony/cashflow")),
    },
    EventTemplate {
        kind: EventKind::Task,
        severity: Some(Severity::Medium),
        title: "Criar régua de cobrança 30–60 dias",
        body: "Usar template SMB v2 para clientes com atraso entre 30-60 dias. Estimativa: 47 clientes afetados.",
        cta: None,
    },
    EventTemplate {
        kind: EventKind::Insight,
        severity: Some(Severity::Low),
        title: "Oportunidade de otimização fiscal",
        body: "Identificada possibilidade de economia de 12% em impostos através de reorganização societária.",
        cta: None,
    },
    EventTemplate {
        kind: EventKind::Alert,
        severity: Some(Severity::Medium),
        title: "Concentração de risco em cliente único",
        body: "Cliente Alpha representa 23% do AR total. Recomendo diversificação da carteira.",
        cta: Some(("Ver Risco & Crédito", "/colony/risk-credit")),
    },
    EventTemplate {
        kind: EventKind::Insight,
        severity: Some(Severity::Medium),
        title: "Sazonalidade detectada nas vendas",
        body: "Padrão recorrente de queda de 15% nas vendas em janeiro. Considere estratégia de retenção.",
        cta: Some(("Ver Simulador", "/colony/simulator")),
    },
    EventTemplate {
        kind: EventKind::Task,
        severity: Some(Severity::Low),
        title: "Atualizar política de crédito",
        body: "Política atual desatualizada há 6 meses. Revisar limites e critérios de aprovação.",
        cta: None,
    },
];

/// First template whose title contains `fragment`, case-insensitively.
pub fn find_by_title(fragment: &str) -> Option<&'static EventTemplate> {
    let needle = fragment.to_lowercase();
    TEMPLATES
        .iter()
        .find(|template| template.title.to_lowercase().contains(&needle))
}

impl EventTemplate {
    /// Stamp a fresh event from this template: new id, current timestamp,
    /// status `Open`.
    pub fn instantiate(&self) -> AgentEvent {
        AgentEvent {
            id: Uuid::new_v4().to_string(),
            kind: self.kind,
            severity: self.severity,
            title: self.title.to_string(),
            body: Some(self.body.to_string()),
            timestamp: Utc::now().to_rfc3339(),
            cta: self.cta.map(|(label, href)| CallToAction {
                label: label.to_string(),
                href: href.to_string(),
            }),
            status: EventStatus::Open,
        }
    }
}

//! Free-text command processing.
//!
//! Maps a user command to a canned natural-language response after an
//! artificial processing delay. Matching is case-insensitive substring
//! containment against a fixed list of keyword groups; the first group to
//! match wins, and anything else degrades to a generic fallback that quotes
//! the input. Never fails.

use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tokio::time;

const LATENCY_MS: RangeInclusive<u64> = 1_000..=3_000;

pub struct CommandProcessor {
    latency: Option<RangeInclusive<u64>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self {
            latency: Some(LATENCY_MS),
        }
    }

    /// Processor that resolves immediately. Used by tests and demos.
    pub fn without_latency() -> Self {
        Self { latency: None }
    }

    /// Resolve `command` to a response. Suspends the caller for a uniform
    /// 1–3 s before answering; the response is always non-empty.
    pub async fn process(&self, command: &str) -> String {
        if let Some(range) = &self.latency {
            let ms = rand::thread_rng().gen_range(range.clone());
            time::sleep(Duration::from_millis(ms)).await;
        }
        respond(command)
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn respond(command: &str) -> String {
    let lower = command.to_lowercase();

    if lower.contains("margem") || lower.contains("margin") {
        return "A margem bruta atual está em 41%, com queda de 2,1pp no último mês. A BU Sul apresenta a maior variação negativa. Recomendo análise detalhada dos custos de matéria-prima e revisão da política de descontos.".to_string();
    }

    if lower.contains("dso") || lower.contains("receb") {
        return "O DSO atual é de 54 dias, 8% acima do período anterior. Principais fatores: concentração em clientes B/C (67% do total) e aumento de 12% nos prazos médios de pagamento. Sugestão: implementar régua de cobrança automatizada.".to_string();
    }

    if lower.contains("burn") || lower.contains("queima") {
        return "Burn rate atual: R$ 180k/mês, resultando em runway de 9 meses. Principais componentes: folha (45%), marketing (25%), infraestrutura (20%). Recomendo otimização imediata dos gastos não-essenciais.".to_string();
    }

    if lower.contains("briefing") || lower.contains("board") {
        return format!(
            "**Briefing Executivo - {}**\n\n• **Receita**: R$ 820k (+12% vs mês anterior)\n• **Margem**: 41% (-2,1pp) - atenção BU Sul\n• **DSO**: 54 dias (+8%) - concentração B/C\n• **Burn**: R$ 180k/mês - runway 9 meses\n• **Inadimplência**: 8,7% (+1,4pp)\n\n**Ações Recomendadas:**\n1. Revisar política de preços BU Sul\n2. Implementar cobrança automatizada\n3. Otimizar gastos operacionais\n4. Diversificar carteira de clientes",
            Local::now().format("%d/%m/%Y")
        );
    }

    if lower.contains("cenário") || lower.contains("simulação") {
        return "Criei um novo cenário baseado nas condições atuais. Principais premissas: preço +5%, volume estável, CAC -10%. Resultado projetado: margem de 43% e receita de R$ 861k/mês. Cenário salvo como \"Otimização Q4 2025\".".to_string();
    }

    format!(
        "Analisei sua solicitação sobre \"{command}\". Com base nos dados atuais, identifiquei algumas oportunidades de otimização. Posso gerar análises mais específicas se você detalhar qual aspecto gostaria de explorar."
    )
}

//! crates/dash_report/src/i18n.rs
//!
//! Compile-time phrasebook for every user-visible label the dashboard
//! emits (chart series names, table headers, notifications).
//! Portuguese (pt-BR) is the report's native language; English is offered
//! for exported pages. Unknown keys come back unchanged.

use core::fmt;
use core::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    PtBr,
    En,
}

impl Lang {
    /// IETF tag written to `<html lang="…">`.
    pub fn tag(self) -> &'static str {
        match self {
            Lang::PtBr => "pt-BR",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Lang {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt" | "pt-BR" | "pt_BR" | "pt-br" => Ok(Lang::PtBr),
            "en" | "en-US" | "en_US" | "en-GB" => Ok(Lang::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

#[derive(Copy, Clone)]
struct Phrase {
    key: &'static str,
    pt: &'static str,
    en: &'static str,
}

const PHRASES: &[Phrase] = &[
    Phrase { key: "page_title",      pt: "Auditoria de Votação",      en: "Voting Audit" },
    Phrase { key: "kpi_a",           pt: "Cenário A (regras)",        en: "Scenario A (rules)" },
    Phrase { key: "kpi_b",           pt: "Cenário B (sem padrão)",    en: "Scenario B (no pattern)" },
    Phrase { key: "kpi_c",           pt: "Cenário C (conservador)",   en: "Scenario C (conservative)" },
    Phrase { key: "ranking",         pt: "Ranking por cenário",       en: "Ranking by scenario" },
    Phrase { key: "scenario",        pt: "Cenário",                   en: "Scenario" },
    Phrase { key: "col_rank",        pt: "#",                         en: "#" },
    Phrase { key: "col_name",        pt: "Nome",                      en: "Name" },
    Phrase { key: "col_votes",       pt: "Votos",                     en: "Votes" },
    Phrase { key: "col_share",       pt: "%",                         en: "%" },
    Phrase { key: "votes_unit",      pt: "votos",                     en: "votes" },
    Phrase { key: "daily_volume",    pt: "Volume diário",             en: "Daily volume" },
    Phrase { key: "daily_shares",    pt: "Participação diária",       en: "Daily shares" },
    Phrase { key: "submissions",     pt: "Submissões",                en: "Submissions" },
    Phrase { key: "unique_emails",   pt: "E-mails únicos",            en: "Unique e-mails" },
    Phrase { key: "duplicates",      pt: "Duplicatas",                en: "Duplicates" },
    Phrase { key: "unique_dupes",    pt: "Únicos/Duplicatas",         en: "Unique/Duplicates" },
    Phrase { key: "mario_share",     pt: "Share do MÁRIO ROQUE",      en: "MÁRIO ROQUE share" },
    Phrase { key: "pattern_share",   pt: "Share do padrão suspeito",  en: "Suspicious pattern share" },
    Phrase { key: "methodology",     pt: "Metodologia",               en: "Methodology" },
    Phrase { key: "rule",            pt: "Regra",                     en: "Rule" },
    Phrase { key: "value",           pt: "Valor",                     en: "Value" },
    Phrase { key: "excluded_days",   pt: "Dias excluídos",            en: "Excluded days" },
    Phrase { key: "dedupe_exact",    pt: "Deduplicação exata de e-mail", en: "Exact e-mail dedupe" },
    Phrase { key: "bot_pattern",     pt: "Padrão de robô",            en: "Bot pattern" },
    Phrase { key: "yes",             pt: "sim",                       en: "yes" },
    Phrase { key: "no",              pt: "não",                       en: "no" },
    Phrase { key: "none",            pt: "nenhum",                    en: "none" },
    Phrase { key: "generated_at",    pt: "Gerado em",                 en: "Generated at" },
    Phrase { key: "digest",          pt: "SHA-256 do relatório",      en: "Report SHA-256" },
    Phrase { key: "load_failed",
             pt: "Erro ao carregar a página de análise. Veja o console.",
             en: "Failed to load the analysis page. See the console." },
];

/// Look up `key` in `lang`; unknown keys are returned as-is.
pub fn t(lang: Lang, key: &'static str) -> &'static str {
    for p in PHRASES {
        if p.key == key {
            return match lang {
                Lang::PtBr => p.pt,
                Lang::En => p.en,
            };
        }
    }
    key
}

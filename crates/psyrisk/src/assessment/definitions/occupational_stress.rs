use super::super::catalog::CatalogDefinition;
use super::super::domain::{Polarity, RecommendationPriority as Priority, RiskLevel};
use super::super::recommendations::RecommendationTables;
use super::super::rules::RuleTables;
use super::super::scoring::{ClassificationTable, LabelSet, RiskThresholds};
use super::{definition, dimension, AssessmentKind};

pub(super) fn catalog() -> CatalogDefinition {
    definition(
        AssessmentKind::OccupationalStress,
        None,
        vec![
            dimension(
                "stressors",
                "Estressores",
                Polarity::Negative,
                &[
                    (101, false, "Fico irritado(a) com a pressão por resultados."),
                    (102, false, "A forma como as tarefas são distribuídas me deixa nervoso(a)."),
                    (103, false, "Sinto-me incomodado(a) com a falta de informações sobre decisões."),
                    (104, true, "Consigo terminar o dia de trabalho tranquilo(a)."),
                    (105, false, "O tempo insuficiente para as tarefas me deixa tenso(a)."),
                    (106, false, "Conflitos com colegas ou chefias me deixam esgotado(a)."),
                ],
            ),
            dimension(
                "control",
                "Controle sobre o Trabalho",
                Polarity::Positive,
                &[
                    (107, false, "Consigo organizar minha rotina de trabalho."),
                    (108, false, "Tenho liberdade para escolher como executar as tarefas."),
                    (109, true, "Minhas tarefas mudam sem qualquer aviso prévio."),
                    (110, false, "Consigo aplicar minhas habilidades no trabalho."),
                ],
            ),
            dimension(
                "support",
                "Apoio no Trabalho",
                Polarity::Positive,
                &[
                    (111, false, "Existe um bom ambiente entre os colegas."),
                    (112, false, "Sou compreendido(a) quando tenho um dia ruim."),
                    (113, false, "Minha chefia apoia meu desenvolvimento."),
                    (114, true, "Evito pedir ajuda por medo de ser julgado(a)."),
                ],
            ),
        ],
    )
}

pub(super) fn rules() -> RuleTables {
    RuleTables {
        classification: ClassificationTable::new(RiskThresholds::default(), LabelSet::intensity()),
        recommendations: recommendations(),
        ..RuleTables::default()
    }
}

fn recommendations() -> RecommendationTables {
    RecommendationTables::default()
        .with_overall(
            RiskLevel::Low,
            Priority::Low,
            &[
                "Nível de estresse reduzido; manter as práticas atuais de organização do trabalho",
                "Repetir a escala anualmente para acompanhar a evolução",
                "Compartilhar com a equipe os fatores de proteção identificados",
            ],
        )
        .with_overall(
            RiskLevel::Moderate,
            Priority::Medium,
            &[
                "Estresse em nível aceitável; acompanhar os estressores mais pontuados",
                "Oferecer oficinas de manejo do estresse",
                "Reavaliar em seis meses",
            ],
        )
        .with_overall(
            RiskLevel::High,
            Priority::High,
            &[
                "Estresse moderado; revisar a organização do trabalho junto às equipes",
                "Oferecer escuta psicológica aos trabalhadores",
                "Reavaliar em três meses",
            ],
        )
        .with_overall(
            RiskLevel::Critical,
            Priority::High,
            &[
                "Estresse elevado; encaminhar os casos para avaliação do serviço de saúde ocupacional",
                "Oferecer escuta psicológica aos trabalhadores",
                "Reduzir imediatamente as sobrecargas identificadas",
                "Reavaliar em um mês",
            ],
        )
        .with_dimension(
            "stressors",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Mapear as fontes de pressão e redistribuir as demandas",
                "Melhorar a comunicação sobre decisões que afetam as equipes",
            ],
        )
        .with_dimension(
            "stressors",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Reduzir imediatamente as sobrecargas identificadas",
                "Mediar os conflitos interpessoais relatados",
            ],
        )
        .with_dimension(
            "control",
            RiskLevel::High,
            Priority::Medium,
            &["Dar previsibilidade às mudanças de tarefas e prioridades"],
        )
        .with_dimension(
            "control",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Devolver aos trabalhadores margem de decisão sobre a própria rotina",
                "Dar previsibilidade às mudanças de tarefas e prioridades",
            ],
        )
        .with_dimension(
            "support",
            RiskLevel::High,
            Priority::Medium,
            &["Fortalecer o apoio da chefia imediata com encontros individuais"],
        )
        .with_dimension(
            "support",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Oferecer escuta psicológica aos trabalhadores",
                "Fortalecer o apoio da chefia imediata com encontros individuais",
            ],
        )
}

use super::super::catalog::CatalogDefinition;
use super::super::domain::{Polarity, RecommendationPriority as Priority, RiskLevel};
use super::super::recommendations::RecommendationTables;
use super::super::rules::RuleTables;
use super::super::scoring::{ClassificationTable, LabelSet, RiskThresholds};
use super::{definition, dimension, AssessmentKind};

const SENSITIVE_DIMENSION: &str = "violence_harassment";

const FOCUS_GROUPS: &str =
    "Conduzir grupos focais com as equipes afetadas para aprofundar o diagnóstico";
const ACTION_PLAN: &str = "Elaborar plano de ação com responsáveis, prazos e indicadores de acompanhamento";
const LEADERSHIP_TRAINING: &str =
    "Capacitar lideranças em gestão humanizada e comunicação não violenta";

pub(super) fn catalog() -> CatalogDefinition {
    definition(
        AssessmentKind::Psychosocial,
        Some(SENSITIVE_DIMENSION),
        vec![
            dimension(
                "job_demands",
                "Demandas do Trabalho",
                Polarity::Negative,
                &[
                    (1, false, "Tenho que trabalhar muito rápido para dar conta das tarefas."),
                    (2, false, "O volume de trabalho é excessivo para a minha jornada."),
                    (3, false, "Recebo prazos impossíveis de cumprir."),
                    (4, true, "Tenho tempo suficiente para concluir minhas tarefas com qualidade."),
                    (5, false, "Preciso fazer pausas mais curtas do que deveria."),
                ],
            ),
            dimension(
                "autonomy",
                "Autonomia e Controle",
                Polarity::Positive,
                &[
                    (6, false, "Posso decidir como realizar o meu trabalho."),
                    (7, false, "Tenho voz sobre o ritmo em que trabalho."),
                    (8, true, "Preciso pedir autorização até para decisões simples."),
                    (9, false, "Participo das decisões que afetam a minha área."),
                ],
            ),
            dimension(
                "social_support",
                "Apoio Social",
                Polarity::Positive,
                &[
                    (10, false, "Posso contar com meus colegas quando o trabalho fica difícil."),
                    (11, false, "Minha liderança me ajuda a resolver problemas do trabalho."),
                    (12, false, "Recebo as informações de que preciso para trabalhar bem."),
                    (13, true, "Sinto-me sozinho(a) para lidar com as dificuldades do dia a dia."),
                ],
            ),
            dimension(
                "recognition",
                "Reconhecimento e Recompensas",
                Polarity::Positive,
                &[
                    (14, false, "Meu esforço é reconhecido pela organização."),
                    (15, false, "Recebo retorno construtivo sobre o meu desempenho."),
                    (16, true, "Meu trabalho passa despercebido, por melhor que seja."),
                    (17, false, "As oportunidades de crescimento são distribuídas de forma justa."),
                ],
            ),
            dimension(
                "job_security",
                "Segurança no Emprego",
                Polarity::Positive,
                &[
                    (18, false, "Sinto estabilidade em relação ao meu emprego."),
                    (19, true, "Tenho receio constante de ser desligado(a)."),
                    (20, false, "Mudanças na organização são comunicadas com antecedência."),
                ],
            ),
            dimension(
                "physical_environment",
                "Ambiente Físico",
                Polarity::Positive,
                &[
                    (21, false, "Meu posto de trabalho é ergonomicamente adequado."),
                    (22, false, "Tenho os equipamentos e ferramentas necessários."),
                    (23, true, "Ruído, temperatura ou iluminação atrapalham o meu trabalho."),
                    (24, false, "O ambiente de trabalho é seguro."),
                ],
            ),
            dimension(
                "work_family_conflict",
                "Conflito Trabalho-Família",
                Polarity::Negative,
                &[
                    (25, false, "As exigências do trabalho interferem na minha vida pessoal."),
                    (26, false, "Levo trabalho para casa com frequência."),
                    (27, true, "Consigo me desconectar do trabalho fora do expediente."),
                    (28, false, "Deixo de participar de eventos familiares por causa do trabalho."),
                ],
            ),
            dimension(
                "organizational_culture",
                "Cultura Organizacional",
                Polarity::Positive,
                &[
                    (29, false, "Os valores da organização são praticados no dia a dia."),
                    (30, false, "Há respeito e confiança entre as pessoas."),
                    (31, false, "Posso expressar opiniões divergentes sem medo de retaliação."),
                    (32, true, "Erros são tratados com punição em vez de aprendizado."),
                ],
            ),
            dimension(
                SENSITIVE_DIMENSION,
                "Violência e Assédio",
                Polarity::Negative,
                &[
                    (33, false, "Já presenciei ou sofri humilhações no ambiente de trabalho."),
                    (34, false, "Recebo ameaças, gritos ou intimidações de colegas ou superiores."),
                    (35, false, "Já sofri comentários ou abordagens de cunho sexual indesejados."),
                    (36, true, "Sinto-me seguro(a) para denunciar situações de assédio."),
                ],
            ),
        ],
    )
}

/// Classification, weights, alerts, and overall-tier recommendations, with no
/// per-dimension rules.
pub(super) fn overall_rules() -> RuleTables {
    RuleTables {
        classification: ClassificationTable::new(RiskThresholds::default(), LabelSet::risk()),
        recommendations: overall_recommendations(),
        ..RuleTables::default()
    }
}

pub(super) fn rules() -> RuleTables {
    let mut rules = overall_rules();
    rules.recommendations = dimension_recommendations(rules.recommendations);
    rules
}

fn overall_recommendations() -> RecommendationTables {
    RecommendationTables::default()
        .with_overall(
            RiskLevel::Low,
            Priority::Low,
            &[
                "Manter as boas práticas de gestão de pessoas já adotadas",
                "Repetir a avaliação periodicamente para monitorar tendências",
                "Divulgar os resultados às equipes e reforçar os canais de escuta",
            ],
        )
        .with_overall(
            RiskLevel::Moderate,
            Priority::Medium,
            &[
                "Incluir os fatores de risco identificados no inventário de riscos do PGR",
                "Promover rodas de conversa sobre saúde mental e bem-estar",
                "Reavaliar as dimensões em atenção em até seis meses",
            ],
        )
        .with_overall(
            RiskLevel::High,
            Priority::High,
            &[
                ACTION_PLAN,
                "Envolver a alta liderança e o SESMT na priorização das intervenções",
                FOCUS_GROUPS,
                "Reavaliar o ambiente em até três meses após as primeiras ações",
            ],
        )
        .with_overall(
            RiskLevel::Critical,
            Priority::High,
            &[
                "Instituir comitê de crise psicossocial com reuniões semanais",
                ACTION_PLAN,
                "Disponibilizar apoio psicológico imediato aos trabalhadores",
                "Comunicar de forma transparente as medidas que serão adotadas",
            ],
        )
}

fn dimension_recommendations(tables: RecommendationTables) -> RecommendationTables {
    tables
        .with_dimension(
            "job_demands",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Revisar a distribuição de tarefas e o dimensionamento das equipes",
                FOCUS_GROUPS,
            ],
        )
        .with_dimension(
            "job_demands",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Redimensionar metas e prazos imediatamente junto às lideranças",
                "Garantir o cumprimento das pausas e do limite da jornada",
            ],
        )
        .with_dimension(
            "autonomy",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Ampliar a participação dos trabalhadores nas decisões sobre o próprio trabalho",
                FOCUS_GROUPS,
            ],
        )
        .with_dimension(
            "autonomy",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Revisar fluxos de aprovação que retiram o controle do trabalhador sobre as tarefas",
                LEADERSHIP_TRAINING,
            ],
        )
        .with_dimension(
            "social_support",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Criar rituais de integração e apoio entre pares",
                LEADERSHIP_TRAINING,
            ],
        )
        .with_dimension(
            "social_support",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Implantar programa de mentoria e acompanhamento individual",
                "Disponibilizar programa de assistência ao empregado",
            ],
        )
        .with_dimension(
            "recognition",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Estruturar práticas regulares de feedback e reconhecimento",
                FOCUS_GROUPS,
            ],
        )
        .with_dimension(
            "recognition",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Revisar a política de cargos, salários e critérios de promoção",
                "Estruturar práticas regulares de feedback e reconhecimento",
            ],
        )
        .with_dimension(
            "job_security",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Comunicar com clareza os planos da organização e as mudanças previstas",
                FOCUS_GROUPS,
            ],
        )
        .with_dimension(
            "job_security",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Oferecer canais diretos para esclarecer dúvidas sobre reestruturações",
                "Disponibilizar apoio psicológico imediato aos trabalhadores",
            ],
        )
        .with_dimension(
            "physical_environment",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Realizar análise ergonômica do trabalho nos postos avaliados",
                "Corrigir condições de ruído, iluminação e temperatura",
            ],
        )
        .with_dimension(
            "physical_environment",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Interditar ou adequar imediatamente os postos com risco à integridade",
                "Realizar análise ergonômica do trabalho nos postos avaliados",
            ],
        )
        .with_dimension(
            "work_family_conflict",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Estabelecer política de direito à desconexão fora do expediente",
                "Avaliar a adoção de horários flexíveis",
            ],
        )
        .with_dimension(
            "work_family_conflict",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Controlar horas extras e proibir demandas fora do expediente",
                "Estabelecer política de direito à desconexão fora do expediente",
            ],
        )
        .with_dimension(
            "organizational_culture",
            RiskLevel::High,
            Priority::Medium,
            &[
                "Revisar e comunicar o código de conduta da organização",
                LEADERSHIP_TRAINING,
            ],
        )
        .with_dimension(
            "organizational_culture",
            RiskLevel::Critical,
            Priority::High,
            &[
                "Implantar canal de escuta com garantia de não retaliação",
                "Revisar e comunicar o código de conduta da organização",
            ],
        )
        .with_dimension(
            SENSITIVE_DIMENSION,
            RiskLevel::High,
            Priority::High,
            &[
                "Apurar os relatos de assédio por meio de comissão independente",
                "Reforçar o canal de denúncias anônimo e a proteção ao denunciante",
            ],
        )
        .with_dimension(
            SENSITIVE_DIMENSION,
            RiskLevel::Critical,
            Priority::High,
            &[
                "Acionar imediatamente o protocolo de prevenção e combate ao assédio",
                "Oferecer acolhimento e suporte às possíveis vítimas",
                "Apurar os relatos de assédio por meio de comissão independente",
            ],
        )
}

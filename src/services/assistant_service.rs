//! Asistente "IA" de la demo
//!
//! No hay NLP: cada consulta se compara en minúsculas contra una lista
//! ordenada de palabras clave y gana la primera regla que coincide. Hay dos
//! bancos de respuestas, uno para consultas GET (`?q=`) y otro para POST.

/// Banco de respuestas según el método de la consulta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantBank {
    Get,
    Post,
}

/// Tema detectado en la consulta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTopic {
    TopDrivers,
    FuelEfficiency,
    Safety,
    Routes,
    CostSavings,
    General,
}

struct KeywordRule {
    keywords: &'static [&'static str],
    topic: QueryTopic,
}

const GET_RULES: &[KeywordRule] = &[
    KeywordRule { keywords: &["top driver"], topic: QueryTopic::TopDrivers },
    KeywordRule { keywords: &["fuel"], topic: QueryTopic::FuelEfficiency },
    KeywordRule { keywords: &["safety", "accident"], topic: QueryTopic::Safety },
    KeywordRule { keywords: &["route"], topic: QueryTopic::Routes },
];

const POST_RULES: &[KeywordRule] = &[
    KeywordRule { keywords: &["top driver"], topic: QueryTopic::TopDrivers },
    KeywordRule { keywords: &["fuel"], topic: QueryTopic::FuelEfficiency },
    KeywordRule { keywords: &["cost", "saving"], topic: QueryTopic::CostSavings },
];

const GET_SUGGESTIONS: [&str; 4] = [
    "Show me top drivers this week",
    "How is our fuel efficiency?",
    "What's our safety score?",
    "Recommend optimal routes",
];

const POST_SUGGESTIONS: [&str; 4] = [
    "Show me fuel efficiency trends",
    "Which routes need optimization?",
    "How are driver safety scores?",
    "Calculate cost savings this month",
];

impl AssistantBank {
    fn rules(&self) -> &'static [KeywordRule] {
        match self {
            AssistantBank::Get => GET_RULES,
            AssistantBank::Post => POST_RULES,
        }
    }

    pub fn suggestions(&self) -> [&'static str; 4] {
        match self {
            AssistantBank::Get => GET_SUGGESTIONS,
            AssistantBank::Post => POST_SUGGESTIONS,
        }
    }

    /// Primera regla cuya palabra clave aparece en la consulta
    pub fn classify(&self, query: &str) -> QueryTopic {
        let query = query.to_lowercase();
        self.rules()
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| query.contains(keyword)))
            .map(|rule| rule.topic)
            .unwrap_or(QueryTopic::General)
    }

    /// Texto de respuesta para un tema. Los temas sin regla en este banco
    /// devuelven la respuesta genérica.
    pub fn response(&self, topic: QueryTopic) -> &'static str {
        match (self, topic) {
            (AssistantBank::Get, QueryTopic::TopDrivers) => {
                "Based on current data, Rajesh Kumar is your top driver with a safety score of 98/100 and zero violations this month."
            }
            (AssistantBank::Get, QueryTopic::FuelEfficiency) => {
                "Your fleet's current fuel efficiency is 6.2 km/L, which is 5% better than last month. Vehicle MH-12-AB-1234 has the best efficiency at 7.1 km/L."
            }
            (AssistantBank::Get, QueryTopic::Safety) => {
                "Your fleet safety score is 94/100. There have been 40% fewer accidents compared to last year, saving approximately ₹2.1L in insurance costs."
            }
            (AssistantBank::Get, QueryTopic::Routes) => {
                "The Mumbai to Pune Express route is most efficient with moderate traffic. I recommend scheduling deliveries during 10 AM - 2 PM for optimal fuel savings."
            }
            (AssistantBank::Get, _) => {
                "I'm a demo AI assistant. I can help you with fleet analytics, but I need real AI integration to provide detailed insights."
            }
            (AssistantBank::Post, QueryTopic::TopDrivers) => {
                "Your top performing drivers this week are:\n1. Rajesh Kumar - 98 safety score, 0 violations\n2. Priya Sharma - 96 safety score, 0 violations\n3. Amit Patel - 92 safety score, 1 minor violation"
            }
            (AssistantBank::Post, QueryTopic::FuelEfficiency) => {
                "Fuel Analysis:\n• Current efficiency: 6.2 km/L (+5% from last month)\n• Monthly fuel cost: ₹2,45,000\n• Potential savings: ₹28,500/month with route optimization\n• Best performing vehicle: MH-12-AB-1234 (7.1 km/L)"
            }
            (AssistantBank::Post, QueryTopic::CostSavings) => {
                "Cost Savings Summary:\n• Monthly savings: ₹47,500\n• Annual savings: ₹5,70,000\n• ROI: 285%\n• Main contributors: Fuel efficiency (60%), Accident reduction (25%), Maintenance optimization (15%)"
            }
            (AssistantBank::Post, _) => {
                "I'm a demo AI assistant for FleetPulse. Ask me about your fleet performance, drivers, routes, or safety metrics."
            }
        }
    }

    pub fn answer(&self, query: &str) -> &'static str {
        self.response(self.classify(query))
    }
}

use crate::domain::model::Language;

/// Every display string the terminal UI needs, for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub analyze_btn: &'static str,
    pub analyzing: &'static str,
    pub estimated_value: &'static str,
    pub breakdown: &'static str,
    pub brandability: &'static str,
    pub keywords: &'static str,
    pub extensions: &'static str,
    pub age: &'static str,
    pub comparable_sales: &'static str,
    pub why_this_value: &'static str,
    pub error: &'static str,
    pub try_again: &'static str,
    pub sales_disclaimer: &'static str,
    pub score: &'static str,
    pub market_trends: &'static str,
    pub language_label: &'static str,
    pub steps: [(&'static str, &'static str); 3],
    pub footer: &'static str,
    pub commands_help: &'static str,
    pub unknown_command: &'static str,
}

pub static ENGLISH: Translations = Translations {
    title: "DomainWorth Pro",
    subtitle: "Professional AI-Powered Domain Valuation",
    placeholder: "Enter a domain (e.g., example.com)",
    analyze_btn: "Analyze Domain",
    analyzing: "Analyzing market data...",
    estimated_value: "Estimated Market Value",
    breakdown: "Valuation Breakdown",
    brandability: "Brandability",
    keywords: "Keyword Analysis",
    extensions: "Extension Potential",
    age: "Domain Age & Trust",
    comparable_sales: "Comparable Sales",
    why_this_value: "Valuation Logic",
    error: "Could not value this domain. Please ensure it is a valid format.",
    try_again: "Try Another Domain",
    sales_disclaimer: "Based on historical market trends for similar domains.",
    score: "Score",
    market_trends: "Market Trends",
    language_label: "Language",
    steps: [
        ("Enter Domain", "Type any domain name you want to check."),
        ("AI Analysis", "Our AI evaluates branding, SEO, and historical data."),
        ("Get Valuation", "See the estimated price and detailed breakdown."),
    ],
    footer: "DomainWorth Pro. AI-generated estimates for informational purposes only.",
    commands_help: "Commands: :lang en | :lang ar | :help | :quit",
    unknown_command: "Unknown command.",
};

pub static ARABIC: Translations = Translations {
    title: "دومين وورث برو",
    subtitle: "تقييم احترافي للنطاقات مدعوم بالذكاء الاصطناعي",
    placeholder: "أدخل اسم النطاق (مثال: example.com)",
    analyze_btn: "تحليل النطاق",
    analyzing: "جاري تحليل بيانات السوق...",
    estimated_value: "القيمة السوقية المقدرة",
    breakdown: "تفاصيل التقييم",
    brandability: "قوة العلامة التجارية",
    keywords: "تحليل الكلمات المفتاحية",
    extensions: "إمكانات الامتدادات",
    age: "عمر النطاق والموثوقية",
    comparable_sales: "مبيعات مماثلة",
    why_this_value: "منطق التقييم",
    error: "تعذر تقييم هذا النطاق. يرجى التأكد من الصيغة.",
    try_again: "جرب نطاق آخر",
    sales_disclaimer: "بناءً على اتجاهات السوق التاريخية لنطاقات مماثلة.",
    score: "الدرجة",
    market_trends: "اتجاهات السوق",
    language_label: "اللغة",
    steps: [
        ("أدخل النطاق", "اكتب أي اسم نطاق تريد فحصه."),
        ("تحليل بالذكاء الاصطناعي", "يقيّم الذكاء الاصطناعي العلامة التجارية وتحسين محركات البحث والبيانات التاريخية."),
        ("احصل على التقييم", "اطّلع على السعر المقدر والتفاصيل الكاملة."),
    ],
    footer: "دومين وورث برو. تقديرات مولدة بالذكاء الاصطناعي لأغراض إعلامية فقط.",
    commands_help: "الأوامر: :lang en | :lang ar | :help | :quit",
    unknown_command: "أمر غير معروف.",
};

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::English => &ENGLISH,
        Language::Arabic => &ARABIC,
    }
}

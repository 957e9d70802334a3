//! Localized tutorial copy.
//!
//! Every `StepId` has a text bundle in every `Language`; the presentation
//! layer never has to handle a missing entry.

use crate::model::{Language, StepId};

/// Title, body and call-to-action for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepText {
    pub title: &'static str,
    pub content: &'static str,
    pub action: &'static str,
}

/// A free-standing message (welcome banner, language picker).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub title: &'static str,
    pub body: &'static str,
}

#[must_use]
pub fn step_text(step: StepId, language: Language) -> StepText {
    match language {
        Language::English => english(step),
        Language::Telugu => telugu(step),
    }
}

/// Banner shown once a language has been chosen.
#[must_use]
pub fn welcome(language: Language) -> Greeting {
    match language {
        Language::English => Greeting {
            title: "Welcome to G3 Tutorial!",
            body: "Let's learn how to use G3 step by step",
        },
        Language::Telugu => Greeting {
            title: "G3 ట్యుటోరియల్‌కు స్వాగతం!",
            body: "G3ని దశలవారీగా ఎలా ఉపయోగించాలో నేర్చుకుందాం",
        },
    }
}

/// Bilingual prompt shown before any language is chosen.
#[must_use]
pub fn language_prompt() -> Greeting {
    Greeting {
        title: "Welcome to G3 Tutorial! • G3 ట్యుటోరియల్‌కు స్వాగతం!",
        body: "This interactive tutorial will guide you through all features\n\
               ఈ ఇంటరాక్టివ్ ట్యుటోరియల్ అన్ని ఫీచర్ల ద్వారా మీకు మార్గనిర్దేశం చేస్తుంది",
    }
}

/// Label of the button that dismisses the completion message.
#[must_use]
pub fn finish_label(language: Language) -> &'static str {
    match language {
        Language::English => "Start Learning!",
        Language::Telugu => "నేర్చుకోవడం ప్రారంభించండి!",
    }
}

/// Label of the language picker button for `language`.
#[must_use]
pub fn language_label(language: Language) -> &'static str {
    match language {
        Language::English => "English Tutorial",
        Language::Telugu => "తెలుగు ట్యుటోరియల్",
    }
}

fn english(step: StepId) -> StepText {
    match step {
        StepId::SelectComic => StepText {
            title: "Step 1: Choose a Story",
            content: "Click on 'The Little Red Hen' to start reading your first story.",
            action: "Click the comic book to continue",
        },
        StepId::OpenBook => StepText {
            title: "Open the Book",
            content: "Great! Now click 'Open Book' to start reading.",
            action: "Click to begin reading",
        },
        StepId::ClickWord => StepText {
            title: "Learn New Words",
            content: "Click on an underlined word to see its meaning. You don't need to understand every word.",
            action: "Click any underlined word",
        },
        StepId::NavigateStory => StepText {
            title: "Navigate the Story",
            content: "Click the arrow button to go to the next page.",
            action: "Click the next button to continue",
        },
        StepId::AddToVault => StepText {
            title: "Save Your Words",
            content: "Excellent! Now click 'Add words to Word Vault' to save what you've learned.",
            action: "Add words to continue",
        },
        StepId::ReturnHome => StepText {
            title: "Return to Home",
            content: "Click the logo on the left side to go back to the home page.",
            action: "Click the logo to continue",
        },
        StepId::GoToVault => StepText {
            title: "Visit Word Vault",
            content: "Click the Vault icon to see your saved words.",
            action: "Open Word Vault",
        },
        StepId::ExplainDifficulty => StepText {
            title: "Understanding Difficulty Levels",
            content: "Easy, Medium, and Hard show how well you know each word. Words from comics start as 'Hard'. To make them 'Easy' or 'Medium', you need to do quizzes!",
            action: "Click Next to continue",
        },
        StepId::AddNewWord => StepText {
            title: "Add Your Own Words",
            content: "You can add new words to your vault using the 'Add New Word' button. Try it out or click Next to skip.",
            action: "Add a word or click Next",
        },
        StepId::DeleteWord => StepText {
            title: "Remove Words",
            content: "Click the trash icon next to any word to delete it from your vault. Try it or click Next to skip.",
            action: "Delete a word or click Next",
        },
        StepId::CreateTag => StepText {
            title: "Organize with Tags",
            content: "You can use the + button to create custom tags for organizing your words. Tags help you group related words together!",
            action: "Click the + button to continue (or press Escape to skip)",
        },
        StepId::StartQuiz => StepText {
            title: "Test Your Knowledge",
            content: "Click the Questions icon to create a quiz.",
            action: "Go to quiz section",
        },
        StepId::CustomizeQuiz => StepText {
            title: "Customize Your Quiz",
            content: "Click the pencil icon to customize your quiz settings.",
            action: "Open quiz settings",
        },
        StepId::TemplateInfo => StepText {
            title: "Save Templates",
            content: "You can save your quiz settings as templates here for quick access later.",
            action: "Click Next to continue",
        },
        StepId::StartQuizInfo => StepText {
            title: "Start Your Quiz",
            content: "Click 'Start Quiz' to begin testing your knowledge!",
            action: "Start quiz or click Next to skip",
        },
        StepId::SaveTemplate => StepText {
            title: "Save as Template",
            content: "Check 'Save as template' and give it a name for quick access later.",
            action: "Create and start quiz",
        },
        StepId::CompleteQuiz => StepText {
            title: "Complete the Quiz",
            content: "Answer all questions to finish the tutorial!",
            action: "Finish your quiz",
        },
        StepId::TutorialComplete => StepText {
            title: "Congratulations! 🎉",
            content: "You've mastered all G3 features! Enjoy learning Telugu!",
            action: "Start exploring on your own",
        },
    }
}

fn telugu(step: StepId) -> StepText {
    match step {
        StepId::SelectComic => StepText {
            title: "దశ 1: కథను ఎంచుకోండి",
            content: "మీ మొదటి కథ చదవడం ప్రారంభించడానికి 'The Little Red Hen'పై క్లిక్ చేయండి.",
            action: "కొనసాగడానికి కామిక్ పుస్తకంపై క్లిక్ చేయండి",
        },
        StepId::OpenBook => StepText {
            title: "పుస్తకం తెరవండి",
            content: "అద్భుతం! ఇప్పుడు చదవడం ప్రారంభించడానికి 'Open Book' క్లిక్ చేయండి.",
            action: "చదవడం ప్రారంభించడానికి క్లిక్ చేయండి",
        },
        StepId::ClickWord => StepText {
            title: "కొత్త పదాలు నేర్చుకోండి",
            content: "అర్థం చూడటానికి అండర్‌లైన్ చేసిన పదంపై క్లిక్ చేయండి. ప్రతి పదాన్ని అర్థం చేసుకోవలసిన అవసరం లేదు.",
            action: "ఏదైనా అండర్‌లైన్ చేసిన పదంపై క్లిక్ చేయండి",
        },
        StepId::NavigateStory => StepText {
            title: "కథను నావిగేట్ చేయండి",
            content: "తదుపరి పేజీకి వెళ్ళడానికి బాణం బటన్‌పై క్లిక్ చేయండి.",
            action: "కొనసాగడానికి తదుపరి బటన్‌పై క్లిక్ చేయండి",
        },
        StepId::AddToVault => StepText {
            title: "మీ పదాలను సేవ్ చేయండి",
            content: "అద్భుతం! మీరు నేర్చుకున్న వాటిని సేవ్ చేయడానికి 'Add words to Word Vault' క్లిక్ చేయండి.",
            action: "కొనసాగడానికి పదాలను జోడించండి",
        },
        StepId::ReturnHome => StepText {
            title: "హోమ్‌కు తిరిగి వెళ్ళండి",
            content: "హోమ్ పేజీకి తిరిగి వెళ్ళడానికి ఎడమ వైపున ఉన్న లోగోపై క్లిక్ చేయండి.",
            action: "కొనసాగడానికి లోగోపై క్లిక్ చేయండి",
        },
        StepId::GoToVault => StepText {
            title: "వర్డ్ వాల్ట్‌ను సందర్శించండి",
            content: "మీ సేవ్ చేసిన పదాలను చూడటానికి Vault చిహ్నంపై క్లిక్ చేయండి.",
            action: "వర్డ్ వాల్ట్ తెరవండి",
        },
        StepId::ExplainDifficulty => StepText {
            title: "కష్ట స్థాయిలను అర్థం చేసుకోవడం",
            content: "Easy, Medium, మరియు Hard అంటే మీకు ప్రతి పదం ఎంత బాగా తెలుసో చూపిస్తాయి. కామిక్స్ నుండి పదాలు 'Hard'గా మొదలవుతాయి. వాటిని 'Easy' లేదా 'Medium' చేయడానికి, మీరు క్విజ్‌లు చేయాలి!",
            action: "కొనసాగడానికి Next క్లిక్ చేయండి",
        },
        StepId::AddNewWord => StepText {
            title: "మీ స్వంత పదాలను జోడించండి",
            content: "'Add New Word' బటన్ ఉపయోగించి మీ వాల్ట్‌కు కొత్త పదాలను జోడించవచ్చు. ప్రయత్నించండి లేదా దాటవేయడానికి Next క్లిక్ చేయండి.",
            action: "పదం జోడించండి లేదా Next క్లిక్ చేయండి",
        },
        StepId::DeleteWord => StepText {
            title: "పదాలను తొలగించండి",
            content: "మీ వాల్ట్ నుండి ఏదైనా పదాన్ని తొలగించడానికి దాని పక్కన ఉన్న ట్రాష్ చిహ్నంపై క్లిక్ చేయండి. ప్రయత్నించండి లేదా దాటవేయడానికి Next క్లిక్ చేయండి.",
            action: "పదం తొలగించండి లేదా Next క్లిక్ చేయండి",
        },
        StepId::CreateTag => StepText {
            title: "ట్యాగ్‌లతో నిర్వహించండి",
            content: "మీ పదాలను నిర్వహించడానికి కస్టమ్ ట్యాగ్‌లను సృష్టించడానికి + బటన్‌ను ఉపయోగించవచ్చు. ట్యాగ్‌లు సంబంధిత పదాలను కలిసి సమూహపరచడంలో సహాయపడతాయి!",
            action: "కొనసాగడానికి + బటన్ క్లిక్ చేయండి (లేదా దాటవేయడానికి Escape నొక్కండి)",
        },
        StepId::StartQuiz => StepText {
            title: "మీ జ్ఞానాన్ని పరీక్షించుకోండి",
            content: "క్విజ్ సృష్టించడానికి Questions చిహ్నంపై క్లిక్ చేయండి.",
            action: "క్విజ్ విభాగానికి వెళ్ళండి",
        },
        StepId::CustomizeQuiz => StepText {
            title: "మీ క్విజ్‌ను అనుకూలీకరించండి",
            content: "మీ క్విజ్ సెట్టింగ్‌లను అనుకూలీకరించడానికి పెన్సిల్ చిహ్నంపై క్లిక్ చేయండి.",
            action: "క్విజ్ సెట్టింగ్‌లు తెరవండి",
        },
        StepId::TemplateInfo => StepText {
            title: "టెంప్లేట్‌లను సేవ్ చేయండి",
            content: "త్వరిత యాక్సెస్ కోసం మీ క్విజ్ సెట్టింగ్‌లను ఇక్కడ టెంప్లేట్‌లుగా సేవ్ చేయవచ్చు.",
            action: "కొనసాగడానికి Next క్లిక్ చేయండి",
        },
        StepId::StartQuizInfo => StepText {
            title: "మీ క్విజ్ ప్రారంభించండి",
            content: "మీ జ్ఞానాన్ని పరీక్షించుకోవడం ప్రారంభించడానికి 'Start Quiz' క్లిక్ చేయండి!",
            action: "క్విజ్ ప్రారంభించండి లేదా దాటవేయడానికి Next క్లిక్ చేయండి",
        },
        StepId::SaveTemplate => StepText {
            title: "టెంప్లేట్‌గా సేవ్ చేయండి",
            content: "'Save as template' చెక్ చేసి, తర్వాత త్వరిత యాక్సెస్ కోసం పేరు ఇవ్వండి.",
            action: "క్విజ్ సృష్టించి ప్రారంభించండి",
        },
        StepId::CompleteQuiz => StepText {
            title: "క్విజ్ పూర్తి చేయండి",
            content: "ట్యుటోరియల్ పూర్తి చేయడానికి అన్ని ప్రశ్నలకు సమాధానం ఇవ్వండి!",
            action: "మీ క్విజ్ పూర్తి చేయండి",
        },
        StepId::TutorialComplete => StepText {
            title: "అభినందనలు! 🎉",
            content: "మీరు అన్ని G3 ఫీచర్లను నేర్చుకున్నారు! తెలుగు నేర్చుకోవడం ఆనందించండి!",
            action: "మీ స్వంతంగా అన్వేషించడం ప్రారంభించండి",
        },
    }
}

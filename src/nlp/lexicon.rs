//! Closed-class word lists and suffix heuristics per language.
//!
//! The taggers are rule-based: closed classes (determiners, pronouns,
//! adpositions, conjunctions, auxiliaries) come from these lists, open
//! classes from suffix heuristics. Lists are deliberately small; an unknown
//! word keeps the open-class ambiguity {noun, verb}.

/// Word lists and suffixes for one language. All entries are lower-case.
pub struct Lexicon {
    pub determiners: &'static [&'static str],
    pub pronouns: &'static [&'static str],
    pub adpositions: &'static [&'static str],
    pub coord_conjunctions: &'static [&'static str],
    pub subord_conjunctions: &'static [&'static str],
    pub auxiliaries: &'static [&'static str],
    pub adverbs: &'static [&'static str],
    pub adverb_suffixes: &'static [&'static str],
    pub adjective_suffixes: &'static [&'static str],
    pub noun_suffixes: &'static [&'static str],
    pub verb_suffixes: &'static [&'static str],
}

pub static ENGLISH: Lexicon = Lexicon {
    determiners: &[
        "the", "a", "an", "this", "that", "these", "those", "each", "every", "all", "any", "some",
        "no", "both", "either", "neither",
    ],
    pronouns: &[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "who",
        "whom", "which", "what", "its", "their", "his", "my", "your", "our",
    ],
    adpositions: &[
        "of", "in", "on", "at", "by", "for", "with", "to", "from", "into", "onto", "over", "under",
        "between", "through", "during", "before", "after", "about", "against", "within", "without",
    ],
    coord_conjunctions: &["and", "or", "but", "nor", "yet", "so"],
    subord_conjunctions: &[
        "if", "because", "although", "while", "when", "whenever", "until", "unless", "since",
        "whether", "that",
    ],
    auxiliaries: &[
        "be", "is", "are", "was", "were", "been", "being", "am", "have", "has", "had", "do",
        "does", "did", "shall", "should", "will", "would", "may", "might", "must", "can", "could",
    ],
    adverbs: &["not", "never", "always", "often", "very", "too", "also", "only", "just"],
    adverb_suffixes: &["ly"],
    adjective_suffixes: &["able", "ible", "ful", "less", "ous", "ive", "ic", "al", "ary"],
    // A final "s" is ambiguous between plural noun and 3rd-person verb,
    // so it appears in both open-class suffix lists.
    noun_suffixes: &["tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood", "er", "or", "ism", "s"],
    verb_suffixes: &["ize", "ise", "ate", "ify", "en", "ing", "ed", "s"],
};

pub static GERMAN: Lexicon = Lexicon {
    determiners: &[
        "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer",
        "eines", "jeder", "jede", "jedes", "alle", "kein", "keine",
    ],
    pronouns: &["ich", "du", "er", "sie", "es", "wir", "ihr", "sein", "ihre", "wer", "was"],
    adpositions: &[
        "von", "in", "an", "auf", "bei", "für", "mit", "zu", "aus", "über", "unter", "zwischen",
        "durch", "während", "vor", "nach", "gegen", "ohne", "innerhalb",
    ],
    coord_conjunctions: &["und", "oder", "aber", "sondern", "denn"],
    subord_conjunctions: &["wenn", "weil", "obwohl", "während", "bis", "dass", "ob", "seit"],
    auxiliaries: &[
        "sein", "ist", "sind", "war", "waren", "haben", "hat", "hatte", "werden", "wird", "wurde",
        "kann", "können", "muss", "müssen", "soll", "sollen", "darf", "dürfen",
    ],
    adverbs: &["nicht", "nie", "immer", "oft", "sehr", "auch", "nur"],
    adverb_suffixes: &["weise"],
    adjective_suffixes: &["lich", "bar", "ig", "isch", "sam", "haft"],
    noun_suffixes: &["ung", "heit", "keit", "schaft", "tät", "nis"],
    verb_suffixes: &["en", "ern", "eln", "te", "t"],
};

pub static FRENCH: Lexicon = Lexicon {
    determiners: &[
        "le", "la", "les", "un", "une", "des", "du", "ce", "cette", "ces", "chaque", "tout",
        "toute", "tous", "toutes", "aucun", "aucune",
    ],
    pronouns: &["je", "tu", "il", "elle", "nous", "vous", "ils", "elles", "qui", "que", "son", "sa", "ses", "leur"],
    adpositions: &[
        "de", "à", "dans", "sur", "par", "pour", "avec", "sans", "sous", "entre", "pendant",
        "avant", "après", "contre", "vers", "chez",
    ],
    coord_conjunctions: &["et", "ou", "mais", "ni", "donc", "or", "car"],
    subord_conjunctions: &["si", "parce", "quand", "lorsque", "bien", "quoique", "puisque"],
    auxiliaries: &[
        "être", "est", "sont", "était", "étaient", "avoir", "a", "ont", "avait", "doit",
        "doivent", "peut", "peuvent", "sera", "seront",
    ],
    adverbs: &["ne", "pas", "jamais", "toujours", "souvent", "très", "aussi", "seulement"],
    adverb_suffixes: &["ment"],
    adjective_suffixes: &["able", "ible", "eux", "euse", "if", "ive", "al", "el", "elle"],
    noun_suffixes: &["tion", "sion", "ment", "té", "ance", "ence", "eur", "age", "isme"],
    verb_suffixes: &["er", "ir", "re", "é", "ée", "ant"],
};

pub static SPANISH: Lexicon = Lexicon {
    determiners: &[
        "el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta", "estos", "estas",
        "cada", "todo", "toda", "todos", "todas", "ningún", "ninguna",
    ],
    pronouns: &["yo", "tú", "él", "ella", "nosotros", "vosotros", "ellos", "ellas", "que", "quien", "su", "sus"],
    adpositions: &[
        "de", "en", "a", "por", "para", "con", "sin", "sobre", "bajo", "entre", "durante",
        "antes", "después", "contra", "hacia", "desde", "hasta",
    ],
    coord_conjunctions: &["y", "e", "o", "u", "pero", "ni", "sino"],
    subord_conjunctions: &["si", "porque", "aunque", "mientras", "cuando", "hasta", "puesto"],
    auxiliaries: &[
        "ser", "es", "son", "era", "eran", "estar", "está", "están", "haber", "ha", "han",
        "había", "debe", "deben", "puede", "pueden", "será", "serán",
    ],
    adverbs: &["no", "nunca", "siempre", "muy", "también", "sólo", "solo"],
    adverb_suffixes: &["mente"],
    adjective_suffixes: &["able", "ible", "oso", "osa", "ivo", "iva", "al", "ico", "ica"],
    noun_suffixes: &["ción", "sión", "miento", "dad", "tad", "ancia", "encia", "dor", "dora", "ismo"],
    verb_suffixes: &["ar", "er", "ir", "ado", "ido", "ando", "iendo"],
};

pub static ITALIAN: Lexicon = Lexicon {
    determiners: &[
        "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "questo", "questa", "questi",
        "queste", "ogni", "tutto", "tutti", "nessun", "nessuna",
    ],
    pronouns: &["io", "tu", "lui", "lei", "noi", "voi", "loro", "che", "chi", "suo", "sua", "suoi"],
    adpositions: &[
        "di", "a", "da", "in", "con", "su", "per", "tra", "fra", "senza", "durante", "prima",
        "dopo", "contro", "verso",
    ],
    coord_conjunctions: &["e", "ed", "o", "ma", "né", "oppure"],
    subord_conjunctions: &["se", "perché", "benché", "mentre", "quando", "finché", "poiché"],
    auxiliaries: &[
        "essere", "è", "sono", "era", "erano", "avere", "ha", "hanno", "aveva", "deve",
        "devono", "può", "possono", "sarà", "saranno",
    ],
    adverbs: &["non", "mai", "sempre", "molto", "anche", "solo", "soltanto"],
    adverb_suffixes: &["mente"],
    adjective_suffixes: &["abile", "ibile", "oso", "osa", "ivo", "iva", "ale", "ico", "ica"],
    noun_suffixes: &["zione", "sione", "mento", "tà", "anza", "enza", "tore", "trice", "ismo"],
    verb_suffixes: &["are", "ere", "ire", "ato", "ito", "ando", "endo"],
};

pub static PORTUGUESE: Lexicon = Lexicon {
    determiners: &[
        "o", "a", "os", "as", "um", "uma", "uns", "umas", "este", "esta", "estes", "estas",
        "cada", "todo", "toda", "todos", "todas", "nenhum", "nenhuma",
    ],
    pronouns: &["eu", "tu", "ele", "ela", "nós", "vós", "eles", "elas", "que", "quem", "seu", "sua", "seus"],
    adpositions: &[
        "de", "em", "a", "por", "para", "com", "sem", "sobre", "sob", "entre", "durante",
        "antes", "depois", "contra", "até", "desde",
    ],
    coord_conjunctions: &["e", "ou", "mas", "nem", "porém", "todavia"],
    subord_conjunctions: &["se", "porque", "embora", "enquanto", "quando", "até", "pois"],
    auxiliaries: &[
        "ser", "é", "são", "era", "eram", "estar", "está", "estão", "haver", "há", "ter", "tem",
        "têm", "tinha", "deve", "devem", "pode", "podem", "será", "serão",
    ],
    adverbs: &["não", "nunca", "sempre", "muito", "também", "só", "apenas"],
    adverb_suffixes: &["mente"],
    adjective_suffixes: &["ável", "ível", "oso", "osa", "ivo", "iva", "al", "ico", "ica"],
    noun_suffixes: &["ção", "são", "mento", "dade", "ância", "ência", "dor", "dora", "ismo"],
    verb_suffixes: &["ar", "er", "ir", "ado", "ido", "ando", "endo", "indo"],
};

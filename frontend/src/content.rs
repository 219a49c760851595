//! Static bilingual content of the marketing pages: the team and the
//! practice areas. Slugs are shared between the Romanian and English URL
//! variants; only the path prefix changes with the language.

use crate::i18n::Pair;

/// One lawyer of the firm.
pub struct Lawyer {
    pub slug: &'static str,
    pub name: &'static str,
    pub role: Pair,
    pub bio: Pair,
    pub email: &'static str,
    pub focus: &'static [Pair],
}

/// The team, in the order shown on the lawyers page.
pub const LAWYERS: &[Lawyer] = &[
    Lawyer {
        slug: "ana-valean",
        name: "Ana Vălean",
        role: ("Partener fondator", "Founding partner"),
        bio: (
            "Coordonează practica de drept comercial și fuziuni. Peste 20 de ani de \
             experiență în tranzacții și litigii societare.",
            "Leads the commercial and M&A practice. More than 20 years of experience in \
             transactions and corporate litigation.",
        ),
        email: "ana.valean@valean.ro",
        focus: &[
            ("Drept societar", "Corporate law"),
            ("Fuziuni și achiziții", "Mergers & acquisitions"),
            ("Arbitraj comercial", "Commercial arbitration"),
        ],
    },
    Lawyer {
        slug: "mihai-pop",
        name: "Mihai Pop",
        role: ("Partener", "Partner"),
        bio: (
            "Specializat în litigii fiscale și contencios administrativ, cu practică \
             îndelungată în fața instanțelor de contencios.",
            "Focuses on tax litigation and administrative disputes, with long-standing \
             practice before the administrative courts.",
        ),
        email: "mihai.pop@valean.ro",
        focus: &[
            ("Drept fiscal", "Tax law"),
            ("Contencios administrativ", "Administrative litigation"),
        ],
    },
    Lawyer {
        slug: "ioana-rusu",
        name: "Ioana Rusu",
        role: ("Avocat senior", "Senior associate"),
        bio: (
            "Asistă clienții firmei în dreptul muncii și protecția datelor, inclusiv în \
             proiecte de conformare GDPR.",
            "Advises the firm's clients on employment law and data protection, including \
             GDPR compliance projects.",
        ),
        email: "ioana.rusu@valean.ro",
        focus: &[
            ("Dreptul muncii", "Employment law"),
            ("Protecția datelor", "Data protection"),
        ],
    },
    Lawyer {
        slug: "radu-georgescu",
        name: "Radu Georgescu",
        role: ("Avocat", "Associate"),
        bio: (
            "Practică generală de drept civil și imobiliar: contracte, carte funciară, \
             litigii locative.",
            "General civil and real-estate practice: contracts, land registry, tenancy \
             disputes.",
        ),
        email: "radu.georgescu@valean.ro",
        focus: &[
            ("Drept civil", "Civil law"),
            ("Drept imobiliar", "Real estate"),
        ],
    },
];

/// Find a lawyer by slug.
pub fn find_lawyer(slug: &str) -> Option<&'static Lawyer> {
    LAWYERS.iter().find(|lawyer| lawyer.slug == slug)
}

/// One practice area offered by the firm.
pub struct PracticeArea {
    pub slug: &'static str,
    pub name: Pair,
    pub summary: Pair,
    pub details: &'static [Pair],
}

/// The practice areas, in the order shown on the services page.
pub const PRACTICE_AREAS: &[PracticeArea] = &[
    PracticeArea {
        slug: "drept-comercial",
        name: ("Drept comercial și societar", "Commercial and corporate law"),
        summary: (
            "Constituire, guvernanță, contracte comerciale și restructurări.",
            "Incorporation, governance, commercial contracts and restructurings.",
        ),
        details: &[
            (
                "Redactăm și negociem contracte comerciale interne și internaționale.",
                "We draft and negotiate domestic and cross-border commercial contracts.",
            ),
            (
                "Asistăm la înființarea și reorganizarea societăților.",
                "We assist with company formation and reorganisation.",
            ),
        ],
    },
    PracticeArea {
        slug: "litigii",
        name: ("Litigii și arbitraj", "Litigation and arbitration"),
        summary: (
            "Reprezentare în fața instanțelor și a tribunalelor arbitrale.",
            "Representation before courts and arbitral tribunals.",
        ),
        details: &[
            (
                "Litigii comerciale, civile și de muncă, în toate fazele procesuale.",
                "Commercial, civil and employment disputes, at every procedural stage.",
            ),
            (
                "Arbitraj intern și internațional, inclusiv executarea sentințelor.",
                "Domestic and international arbitration, including award enforcement.",
            ),
        ],
    },
    PracticeArea {
        slug: "drept-fiscal",
        name: ("Drept fiscal", "Tax law"),
        summary: (
            "Consultanță fiscală, inspecții și contestarea actelor de impunere.",
            "Tax advisory, audits and challenges to assessment decisions.",
        ),
        details: &[
            (
                "Asistență în timpul inspecțiilor fiscale și la redactarea contestațiilor.",
                "Assistance during tax audits and with drafting administrative appeals.",
            ),
            (
                "Reprezentare în contenciosul fiscal.",
                "Representation in tax litigation.",
            ),
        ],
    },
    PracticeArea {
        slug: "dreptul-muncii",
        name: ("Dreptul muncii", "Employment law"),
        summary: (
            "Contracte de muncă, regulamente interne și litigii de muncă.",
            "Employment contracts, internal policies and labour disputes.",
        ),
        details: &[
            (
                "Consultanță pentru angajatori la concedieri individuale și colective.",
                "Advising employers on individual and collective dismissals.",
            ),
            (
                "Reprezentarea salariaților și a angajatorilor în conflicte de muncă.",
                "Representing employees and employers in labour conflicts.",
            ),
        ],
    },
    PracticeArea {
        slug: "drept-imobiliar",
        name: ("Drept imobiliar", "Real estate"),
        summary: (
            "Tranzacții imobiliare, due diligence și urbanism.",
            "Real-estate transactions, due diligence and zoning.",
        ),
        details: &[
            (
                "Verificarea situației juridice a imobilelor înainte de achiziție.",
                "Title due diligence ahead of acquisitions.",
            ),
            (
                "Asistență în proiecte de dezvoltare și autorizare.",
                "Assistance with development and permitting projects.",
            ),
        ],
    },
];

/// Find a practice area by slug.
pub fn find_practice_area(slug: &str) -> Option<&'static PracticeArea> {
    PRACTICE_AREAS.iter().find(|area| area.slug == slug)
}

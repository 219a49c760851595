//! UI strings as Romanian/English pairs.
//!
//! Each constant is a `(ro, en)` tuple picked through [`Lang::pick`]
//! (`valean_shared::Lang`), grouped per page/component. Templates use `{}`
//! placeholders filled with [`fill_one`].
#![allow(dead_code)]

/// One translation pair: `(romanian, english)`.
pub type Pair = (&'static str, &'static str);

/// Substitute the first `{}` placeholder of a template.
pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub mod common {
    use super::Pair;

    pub const LOADING: Pair = ("Se încarcă...", "Loading...");
    pub const ERROR_TITLE: Pair = ("A apărut o eroare", "Something went wrong");
    pub const CLOSE_ARIA: Pair = ("Închide", "Close");
    pub const BACK: Pair = ("Înapoi", "Back");
    pub const READ_MORE: Pair = ("Citește mai mult", "Read more");
}

pub mod header {
    use super::Pair;

    pub const BRAND: Pair = ("Vălean & Asociații", "Vălean & Asociații");
    pub const NAV_HOME: Pair = ("Acasă", "Home");
    pub const NAV_ABOUT: Pair = ("Despre noi", "About us");
    pub const NAV_LAWYERS: Pair = ("Avocați", "Lawyers");
    pub const NAV_SERVICES: Pair = ("Servicii", "Services");
    pub const NAV_NEWS: Pair = ("Noutăți", "News");
    pub const NAV_CONTACT: Pair = ("Contact", "Contact");
    pub const NAV_ADMIN: Pair = ("Administrare", "Admin");
    pub const LOGIN: Pair = ("Autentificare", "Sign in");
    pub const LOGOUT: Pair = ("Deconectare", "Sign out");
    pub const NAV_MAIN_ARIA: Pair = ("Navigație principală", "Main navigation");
    pub const LANG_SWITCH_ARIA: Pair = ("Schimbă limba în engleză", "Switch language to Romanian");
}

pub mod footer {
    use super::Pair;

    pub const TAGLINE: Pair = (
        "Consultanță juridică pentru afaceri și persoane fizice.",
        "Legal counsel for businesses and individuals.",
    );
    pub const RIGHTS: Pair =
        ("© 2024 Vălean & Asociații. Toate drepturile rezervate.", "© 2024 Vălean & Asociații. All rights reserved.");
}

pub mod home {
    use super::Pair;

    pub const HERO_TITLE: Pair =
        ("Experiență. Integritate. Rezultate.", "Experience. Integrity. Results.");
    pub const HERO_SUBTITLE: Pair = (
        "Peste douăzeci de ani de practică în drept comercial, civil și fiscal.",
        "More than twenty years of practice in commercial, civil and tax law.",
    );
    pub const AREAS_TITLE: Pair = ("Arii de practică", "Practice areas");
    pub const LATEST_NEWS_TITLE: Pair = ("Ultimele noutăți", "Latest news");
    pub const ALL_NEWS: Pair = ("Toate noutățile", "All news");
}

pub mod about {
    use super::Pair;

    pub const TITLE: Pair = ("Despre noi", "About us");
    pub const BODY_LEAD: Pair = (
        "Vălean & Asociații este o societate de avocatură din Cluj-Napoca, fondată în 2003. \
         Asistăm antreprenori, companii și persoane fizice în litigii și consultanță.",
        "Vălean & Asociații is a Cluj-Napoca law firm founded in 2003. We assist entrepreneurs, \
         companies and individuals in litigation and advisory work.",
    );
    pub const BODY_VALUES: Pair = (
        "Lucrăm în echipe mici, cu implicarea directă a partenerilor în fiecare dosar. \
         Onorariile sunt transparente și agreate înainte de începerea mandatului.",
        "We work in small teams, with partners directly involved in every case. Fees are \
         transparent and agreed before the engagement starts.",
    );
}

pub mod lawyers {
    use super::Pair;

    pub const TITLE: Pair = ("Avocații noștri", "Our lawyers");
    pub const FOCUS_TITLE: Pair = ("Domenii de activitate", "Areas of focus");
    pub const NOT_FOUND: Pair = ("Avocatul căutat nu există.", "No such lawyer.");
}

pub mod services {
    use super::Pair;

    pub const TITLE: Pair = ("Servicii", "Services");
    pub const NOT_FOUND: Pair = ("Serviciul căutat nu există.", "No such service.");
}

pub mod news {
    use super::Pair;

    pub const TITLE: Pair = ("Noutăți", "News");
    pub const SEARCH_PLACEHOLDER: Pair = ("Caută în noutăți...", "Search the news...");
    pub const CATEGORY_ALL: Pair = ("Toate categoriile", "All categories");
    pub const EMPTY: Pair = ("Nicio noutate găsită.", "No news found.");
    pub const LOAD_FAILED: Pair =
        ("Noutățile nu au putut fi încărcate.", "The news could not be loaded.");
    pub const NOT_FOUND: Pair = ("Articolul căutat nu există.", "No such article.");
    pub const PUBLISHED_ON_TEMPLATE: Pair = ("Publicat la {}", "Published on {}");
}

pub mod pagination {
    use super::Pair;

    pub const ARIA_NAV: Pair = ("Paginare", "Pagination");
    pub const ARIA_PREV: Pair = ("Pagina anterioară", "Previous page");
    pub const ARIA_NEXT: Pair = ("Pagina următoare", "Next page");
    pub const ARIA_GOTO_PAGE_TEMPLATE: Pair = ("Mergi la pagina {}", "Go to page {}");
}

pub mod contact {
    use super::Pair;

    pub const TITLE: Pair = ("Contact", "Contact");
    pub const ADDRESS_LABEL: Pair = ("Adresă", "Address");
    pub const PHONE_LABEL: Pair = ("Telefon", "Phone");
    pub const EMAIL_LABEL: Pair = ("E-mail", "E-mail");
    pub const SCHEDULE_LABEL: Pair = ("Program", "Office hours");
    pub const SCHEDULE: Pair = ("Luni – Vineri, 9:00 – 18:00", "Monday – Friday, 9:00 – 18:00");
}

pub mod login {
    use super::Pair;

    pub const TITLE: Pair = ("Autentificare", "Sign in");
    pub const EMAIL_LABEL: Pair = ("E-mail", "E-mail");
    pub const PASSWORD_LABEL: Pair = ("Parolă", "Password");
    pub const SUBMIT: Pair = ("Autentifică-te", "Sign in");
    pub const FAILED: Pair = (
        "Autentificarea a eșuat. Verifică datele introduse.",
        "Sign-in failed. Check your credentials.",
    );
}

pub mod admin {
    use super::Pair;

    pub const TITLE: Pair = ("Administrare noutăți", "News admin");
    pub const NEW_ARTICLE: Pair = ("Articol nou", "New article");
    pub const SEARCH_PLACEHOLDER: Pair = ("Caută articole...", "Search articles...");
    pub const STATUS_ALL: Pair = ("Toate stările", "Any status");
    pub const STATUS_DRAFT: Pair = ("Ciornă", "Draft");
    pub const STATUS_PUBLISHED: Pair = ("Publicat", "Published");
    pub const CATEGORY_ALL: Pair = ("Toate categoriile", "All categories");
    pub const TAG_PLACEHOLDER: Pair = ("Filtrează după etichetă", "Filter by tag");
    pub const COL_TITLE: Pair = ("Titlu", "Title");
    pub const COL_CATEGORY: Pair = ("Categorie", "Category");
    pub const COL_STATUS: Pair = ("Stare", "Status");
    pub const COL_UPDATED: Pair = ("Actualizat", "Updated");
    pub const COL_ACTIONS: Pair = ("Acțiuni", "Actions");
    pub const ACTION_EDIT: Pair = ("Editează", "Edit");
    pub const ACTION_DELETE: Pair = ("Șterge", "Delete");
    pub const ACTION_PUBLISH: Pair = ("Publică", "Publish");
    pub const ACTION_UNPUBLISH: Pair = ("Retrage", "Unpublish");
    pub const EMPTY: Pair = ("Niciun articol.", "No articles.");
    pub const DELETE_CONFIRM_TEMPLATE: Pair = (
        "Ștergi definitiv articolul „{}”? Operația nu poate fi anulată.",
        "Permanently delete “{}”? This cannot be undone.",
    );
    pub const DELETE_CONFIRM_OK: Pair = ("Șterge definitiv", "Delete permanently");
    pub const DELETE_CONFIRM_CANCEL: Pair = ("Renunță", "Cancel");
}

pub mod editor {
    use super::Pair;

    pub const TITLE_NEW: Pair = ("Articol nou", "New article");
    pub const TITLE_EDIT: Pair = ("Editare articol", "Edit article");
    pub const FIELD_TITLE: Pair = ("Titlu", "Title");
    pub const FIELD_SLUG: Pair = ("Slug", "Slug");
    pub const SLUG_HINT: Pair = (
        "Generat automat din titlu; rămâne fix după prima salvare.",
        "Derived from the title; frozen after the first save.",
    );
    pub const FIELD_EXCERPT: Pair = ("Rezumat", "Excerpt");
    pub const FIELD_CONTENT: Pair = ("Conținut (HTML)", "Content (HTML)");
    pub const FIELD_CATEGORY: Pair = ("Categorie", "Category");
    pub const FIELD_TAGS: Pair =
        ("Etichete (separate prin virgulă)", "Tags (comma-separated)");
    pub const FIELD_COVER: Pair = ("Imagine de copertă", "Cover image");
    pub const SAVE_DRAFT: Pair = ("Salvează ca ciornă", "Save as draft");
    pub const PUBLISH: Pair = ("Publică", "Publish");
    pub const SAVE_CHANGES: Pair = ("Salvează modificările", "Save changes");
    pub const PREVIEW_TITLE: Pair = ("Previzualizare", "Preview");
    pub const PREVIEW_EMPTY: Pair = (
        "Completează titlul și conținutul pentru a vedea previzualizarea.",
        "Fill in the title and content to see the preview.",
    );
    pub const LOAD_FAILED: Pair =
        ("Articolul nu a putut fi încărcat.", "The article could not be loaded.");
}

pub mod not_found {
    use super::Pair;

    pub const TITLE: Pair = ("404 – Pagina nu există", "404 – Page not found");
    pub const BODY: Pair = (
        "Pagina căutată nu a fost găsită.",
        "The page you are looking for does not exist.",
    );
}

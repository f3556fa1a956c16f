//! Interface translations.
//!
//! The selected [`Language`] lives in a context signal and is persisted
//! through [`crate::make_prefs`], so the choice survives reloads. Strings are
//! looked up by [`Key`]; every key has an entry for every language.

use dioxus::prelude::*;
use store::Language;

use crate::make_prefs;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Dashboard,
    Analytics,
    Campaigns,
    Wallet,
    Settings,
    Users,
    AllCampaigns,
    Logout,
    Login,
    Register,
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    ForgotPassword,
    Balance,
    Discount,
    Views,
    Clicks,
    Spent,
    ClickThroughRate,
    NewCampaign,
    Title,
    StartDate,
    EndDate,
    Budget,
    Country,
    Cities,
    Photo,
    Link,
    Gender,
    Status,
    Actions,
    Save,
    Cancel,
    Delete,
    Edit,
    Stop,
    Activate,
    Review,
    Loading,
    Language,
    Transactions,
    TopUp,
    Amount,
    PaymentMethod,
    NoData,
    NotAuthorized,
    BackToDashboard,
}

impl Key {
    pub const ALL: [Key; 50] = [
        Key::Dashboard,
        Key::Analytics,
        Key::Campaigns,
        Key::Wallet,
        Key::Settings,
        Key::Users,
        Key::AllCampaigns,
        Key::Logout,
        Key::Login,
        Key::Register,
        Key::Name,
        Key::Email,
        Key::Phone,
        Key::Password,
        Key::ConfirmPassword,
        Key::ForgotPassword,
        Key::Balance,
        Key::Discount,
        Key::Views,
        Key::Clicks,
        Key::Spent,
        Key::ClickThroughRate,
        Key::NewCampaign,
        Key::Title,
        Key::StartDate,
        Key::EndDate,
        Key::Budget,
        Key::Country,
        Key::Cities,
        Key::Photo,
        Key::Link,
        Key::Gender,
        Key::Status,
        Key::Actions,
        Key::Save,
        Key::Cancel,
        Key::Delete,
        Key::Edit,
        Key::Stop,
        Key::Activate,
        Key::Review,
        Key::Loading,
        Key::Language,
        Key::Transactions,
        Key::TopUp,
        Key::Amount,
        Key::PaymentMethod,
        Key::NoData,
        Key::NotAuthorized,
        Key::BackToDashboard,
    ];
}

fn entry(key: Key) -> [&'static str; 3] {
    match key {
        Key::Dashboard => ["Dashboard", "Tableau de bord", "لوحة التحكم"],
        Key::Analytics => ["Analytics", "Statistiques", "الإحصائيات"],
        Key::Campaigns => ["Campaigns", "Campagnes", "الحملات"],
        Key::Wallet => ["Wallet", "Portefeuille", "المحفظة"],
        Key::Settings => ["Settings", "Paramètres", "الإعدادات"],
        Key::Users => ["Users", "Utilisateurs", "المستخدمون"],
        Key::AllCampaigns => ["All campaigns", "Toutes les campagnes", "كل الحملات"],
        Key::Logout => ["Log out", "Se déconnecter", "تسجيل الخروج"],
        Key::Login => ["Sign in", "Se connecter", "تسجيل الدخول"],
        Key::Register => ["Create account", "Créer un compte", "إنشاء حساب"],
        Key::Name => ["Name", "Nom", "الاسم"],
        Key::Email => ["Email", "E-mail", "البريد الإلكتروني"],
        Key::Phone => ["Phone", "Téléphone", "الهاتف"],
        Key::Password => ["Password", "Mot de passe", "كلمة المرور"],
        Key::ConfirmPassword => ["Confirm password", "Confirmer le mot de passe", "تأكيد كلمة المرور"],
        Key::ForgotPassword => ["Forgot password?", "Mot de passe oublié ?", "نسيت كلمة المرور؟"],
        Key::Balance => ["Balance", "Solde", "الرصيد"],
        Key::Discount => ["Discount", "Remise", "الخصم"],
        Key::Views => ["Views", "Vues", "المشاهدات"],
        Key::Clicks => ["Clicks", "Clics", "النقرات"],
        Key::Spent => ["Spent", "Dépensé", "المصروف"],
        Key::ClickThroughRate => ["CTR", "CTR", "نسبة النقر"],
        Key::NewCampaign => ["New campaign", "Nouvelle campagne", "حملة جديدة"],
        Key::Title => ["Title", "Titre", "العنوان"],
        Key::StartDate => ["Start date", "Date de début", "تاريخ البدء"],
        Key::EndDate => ["End date", "Date de fin", "تاريخ الانتهاء"],
        Key::Budget => ["Budget", "Budget", "الميزانية"],
        Key::Country => ["Country", "Pays", "البلد"],
        Key::Cities => ["Cities", "Villes", "المدن"],
        Key::Photo => ["Photo", "Photo", "الصورة"],
        Key::Link => ["Link", "Lien", "الرابط"],
        Key::Gender => ["Audience", "Audience", "الجمهور"],
        Key::Status => ["Status", "Statut", "الحالة"],
        Key::Actions => ["Actions", "Actions", "الإجراءات"],
        Key::Save => ["Save", "Enregistrer", "حفظ"],
        Key::Cancel => ["Cancel", "Annuler", "إلغاء"],
        Key::Delete => ["Delete", "Supprimer", "حذف"],
        Key::Edit => ["Edit", "Modifier", "تعديل"],
        Key::Stop => ["Stop", "Arrêter", "إيقاف"],
        Key::Activate => ["Activate", "Activer", "تفعيل"],
        Key::Review => ["Review", "Examiner", "مراجعة"],
        Key::Loading => ["Loading...", "Chargement...", "جار التحميل..."],
        Key::Language => ["Language", "Langue", "اللغة"],
        Key::Transactions => ["Transactions", "Transactions", "المعاملات"],
        Key::TopUp => ["Top up", "Recharger", "شحن الرصيد"],
        Key::Amount => ["Amount", "Montant", "المبلغ"],
        Key::PaymentMethod => ["Payment method", "Moyen de paiement", "طريقة الدفع"],
        Key::NoData => ["Nothing here yet", "Rien pour le moment", "لا شيء بعد"],
        Key::NotAuthorized => [
            "You are not allowed to view this page",
            "Vous n'avez pas accès à cette page",
            "لا يسمح لك بعرض هذه الصفحة",
        ],
        Key::BackToDashboard => [
            "Back to dashboard",
            "Retour au tableau de bord",
            "العودة إلى لوحة التحكم",
        ],
    }
}

/// Translate a key.
pub fn t(lang: Language, key: Key) -> &'static str {
    let [en, fr, ar] = entry(key);
    match lang {
        Language::English => en,
        Language::French => fr,
        Language::Arabic => ar,
    }
}

pub fn use_language() -> Signal<Language> {
    use_context::<Signal<Language>>()
}

/// Change and persist the interface language.
pub fn set_language(mut lang: Signal<Language>, value: Language) {
    make_prefs().set_language(value);
    lang.set(value);
}

/// Provides the language signal, seeded from stored preferences or the
/// configured default.
#[component]
pub fn LanguageProvider(default_language: Language, children: Element) -> Element {
    let lang = use_context_provider(|| Signal::new(make_prefs().language_or(default_language)));

    rsx! {
        div {
            class: "app-root",
            lang: lang().code(),
            dir: lang().dir(),
            {children}
        }
    }
}

/// Drop-down switching the interface language.
#[component]
pub fn LanguageSelect(#[props(default = "".to_string())] class: String) -> Element {
    let lang = use_language();

    rsx! {
        select {
            class: "language-select {class}",
            title: t(lang(), Key::Language),
            onchange: move |evt: FormEvent| set_language(lang, Language::from_code(&evt.value())),
            for choice in Language::ALL {
                option {
                    key: "{choice.code()}",
                    value: choice.code(),
                    selected: choice == lang(),
                    "{choice.native_name()}"
                }
            }
        }
    }
}

use crate::{CliError, CliResult, Commands, DemoAccount, LangCommands, admin_sections};

use std::path::Path;
use std::sync::Arc;

use log::info;
use serde_json::{Value, json};
use sk_catalog::{
    CategoryFilter, ContentSource, MenuQuery, Post, Product, featured, featured_posts,
    format_vnd,
};
use sk_config::Config;
use sk_core::{FormRejection, Locale, LoginForm, PasswordStrength, SignupForm};
use sk_i18n::{LocaleStore, TranslationTable};
use sk_session::{
    ADMIN_EMAIL, ADMIN_PASSWORD, DEMO_USER_EMAIL, DEMO_USER_PASSWORD, MockCredentialVerifier,
    SessionStore, SystemClock,
};
use sk_storage::{FileStore, KeyValueStore};

/// One process worth of client state.
pub struct App {
    session: SessionStore,
    locale: LocaleStore,
    content: ContentSource,
}

impl App {
    pub fn new(session: SessionStore, locale: LocaleStore, content: ContentSource) -> Self {
        Self {
            session,
            locale,
            content,
        }
    }

    /// Builds the stores over the storage file in `config_dir`.
    pub fn from_config(config: &Config, config_dir: &Path) -> CliResult<Self> {
        let storage: Arc<dyn KeyValueStore> =
            Arc::new(FileStore::open(config.storage_path(config_dir))?);
        let clock = Arc::new(SystemClock);
        let verifier = Arc::new(MockCredentialVerifier::new(clock.clone()));

        let session = SessionStore::new(
            storage.clone(),
            verifier,
            clock,
            config.session.simulated_latency(),
        );
        let locale = LocaleStore::new(
            storage,
            Arc::new(TranslationTable::builtin()),
            config.locale.default,
        );
        let content = ContentSource::new(
            config.products_path(config_dir),
            config.posts_path(config_dir),
        );

        Ok(Self::new(session, locale, content))
    }

    /// Restores the saved session and language.
    pub fn start(&self) {
        self.session.restore();
        self.locale.initialize();
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => self.login(&email, &password).await,
            Commands::DemoLogin { account } => {
                let (email, password) = match account {
                    DemoAccount::Admin => (ADMIN_EMAIL, ADMIN_PASSWORD),
                    DemoAccount::User => (DEMO_USER_EMAIL, DEMO_USER_PASSWORD),
                };
                self.login(email, password).await
            }
            Commands::Signup {
                name,
                email,
                password,
                confirm_password,
                phone,
            } => {
                let form = SignupForm {
                    name,
                    email,
                    phone: phone.unwrap_or_default(),
                    password,
                    confirm_password,
                };
                self.signup(&form).await
            }
            Commands::Logout => {
                self.session.logout();
                Ok(self.whoami())
            }
            Commands::Whoami => Ok(self.whoami()),
            Commands::Admin => self.admin(),
            Commands::Lang { action } => self.lang(action),
            Commands::T { key } => Ok(json!({
                "key": key,
                "locale": self.locale.locale(),
                "text": self.locale.translate(&key),
            })),
            Commands::Menu {
                category,
                search,
                featured,
            } => self.menu(category.as_deref(), search.unwrap_or_default(), featured),
            Commands::Posts { featured } => self.posts(featured),
        }
    }

    async fn login(&self, email: &str, password: &str) -> CliResult<Value> {
        let form = LoginForm::new(email, password);
        form.validate().map_err(|reason| self.rejected(reason))?;

        if !self.session.login(&form.email, &form.password).await {
            return Err(self.rejected(FormRejection::InvalidCredentials));
        }

        Ok(self.whoami())
    }

    async fn signup(&self, form: &SignupForm) -> CliResult<Value> {
        let data = form.validate().map_err(|reason| self.rejected(reason))?;

        if !self.session.signup(data).await {
            return Err(self.rejected(FormRejection::SignupFailed));
        }

        info!("Account created for {}", form.email);

        let mut value = self.whoami();
        value["passwordStrength"] = json!(
            PasswordStrength::of(&form.password).label(self.locale.locale())
        );
        Ok(value)
    }

    fn whoami(&self) -> Value {
        json!({
            "authenticated": self.session.is_authenticated(),
            "administrator": self.session.is_administrator(),
            "user": self.session.identity(),
            "token": self.session.token(),
        })
    }

    fn admin(&self) -> CliResult<Value> {
        let identity = match self.session.identity() {
            Some(identity) if identity.is_administrator() => identity,
            _ => return Err(CliError::access_denied()),
        };

        let sections: Vec<Value> = admin_sections::sections(self.locale.locale())
            .into_iter()
            .map(|(title, description)| json!({ "title": title, "description": description }))
            .collect();

        Ok(json!({
            "title": self.locale.translate("auth.admin"),
            "user": identity,
            "sections": sections,
        }))
    }

    fn lang(&self, action: LangCommands) -> CliResult<Value> {
        let locale = match action {
            LangCommands::Get => self.locale.locale(),
            LangCommands::Set { locale } => {
                let locale: Locale = locale
                    .parse()
                    .map_err(|e| CliError::invalid_argument(format!("{e}")))?;
                self.locale.set_locale(locale);
                locale
            }
            LangCommands::Toggle => self.locale.toggle(),
        };

        Ok(json!({ "locale": locale }))
    }

    fn menu(&self, category: Option<&str>, search: String, featured_only: bool) -> CliResult<Value> {
        let filter = match category {
            Some(category) => category.parse::<CategoryFilter>()?,
            None => CategoryFilter::All,
        };
        let products = self.content.load_products()?;
        let locale = self.locale.locale();

        let shown: Vec<&Product> = if featured_only {
            featured(&products)
        } else {
            products.iter().collect()
        };
        let query = MenuQuery::new(filter, search);

        let items: Vec<Value> = shown
            .into_iter()
            .filter(|p| query.matches(p, locale))
            .map(|p| self.product_view(p, locale))
            .collect();

        Ok(Value::Array(items))
    }

    fn posts(&self, featured_only: bool) -> CliResult<Value> {
        let posts = self.content.load_posts()?;
        let locale = self.locale.locale();

        let shown: Vec<&Post> = if featured_only {
            featured_posts(&posts)
        } else {
            posts.iter().collect()
        };

        let items: Vec<Value> = shown
            .into_iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "title": p.title.get(locale),
                    "excerpt": p.excerpt.get(locale),
                    "author": p.author.get(locale),
                    "date": p.date,
                    "image": p.image,
                    "featured": p.featured,
                })
            })
            .collect();

        Ok(Value::Array(items))
    }

    fn product_view(&self, product: &Product, locale: Locale) -> Value {
        json!({
            "id": product.id,
            "name": product.name.get(locale),
            "description": product.description.get(locale),
            "price": product.price,
            "priceDisplay": format_vnd(product.price),
            "category": product.category,
            "categoryLabel": self.locale.translate(&product.category.translation_key()),
            "featured": product.featured,
            "image": product.image,
        })
    }

    fn rejected(&self, reason: FormRejection) -> CliError {
        CliError::rejected(reason, reason.message(self.locale.locale()))
    }
}

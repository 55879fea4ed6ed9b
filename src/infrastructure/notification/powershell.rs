//! Windows toast adapter using a generated PowerShell script
//!
//! The notification is rendered into a PowerShell script that loads a Toast
//! XML document through the WinRT notification API. The script is written to
//! a temp file and evaluated by a hidden PowerShell process.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::application::ports::Notifier;
use crate::domain::escape::quote_powershell_literal;
use crate::domain::{escape_powershell, IconSource, Notification, Platform, ToastError};
use crate::infrastructure::process::{
    discard_temp_file, resolve_executable, run_hidden, stage_temp_file,
};

/// Interpreter that evaluates the generated script
pub const POWERSHELL: &str = "PowerShell";

const TEMPLATE_NAME: &str = "toast.ps1";

/// Notifier id used when the app id is empty
const FALLBACK_APP_ID: &str = "Windows App";

const TOAST_TEMPLATE: &str = r#"
[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.UI.Notifications.ToastNotification, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom.XmlDocument, ContentType = WindowsRuntime] | Out-Null

$APP_ID = {{ app_id }}

$template = @"
<toast activationType="{{ activation_type }}" launch="{{ activation_arguments }}" duration="{{ duration }}">
    <visual>
        <binding template="ToastGeneric">
            {% if icon %}
            <image placement="appLogoOverride" src="{{ icon }}" />
            {% endif %}
            {% if title %}
            <text><![CDATA[{{ title }}]]></text>
            {% endif %}
            {% if message %}
            <text><![CDATA[{{ message }}]]></text>
            {% endif %}
        </binding>
    </visual>
    {% if silent %}
    <audio silent="true" />
    {% else %}
    <audio src="{{ audio }}" loop="{{ audio_loop }}" />
    {% endif %}
    {% if actions %}
    <actions>
        {% for action in actions %}
        <action activationType="{{ action.kind }}" content="{{ action.label }}" arguments="{{ action.arguments }}" />
        {% endfor %}
    </actions>
    {% endif %}
</toast>
"@

$xml = New-Object Windows.Data.Xml.Dom.XmlDocument
$xml.LoadXml($template)
$toast = New-Object Windows.UI.Notifications.ToastNotification $xml
[Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier($APP_ID).Show($toast)
"#;

/// Compiled once per process; a parse failure is cached as well
static TEMPLATE_ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

fn template_env() -> Result<&'static Environment<'static>, ToastError> {
    TEMPLATE_ENV
        .get_or_init(|| {
            tracing::debug!("compiling toast template");
            let mut env = Environment::new();
            env.set_auto_escape_callback(|_| AutoEscape::None);
            env.add_template(TEMPLATE_NAME, TOAST_TEMPLATE)
                .map_err(|e| e.to_string())?;
            Ok(env)
        })
        .as_ref()
        .map_err(|e| ToastError::TemplateParse(e.clone()))
}

#[derive(Serialize)]
struct ActionContext {
    kind: String,
    label: String,
    arguments: String,
}

#[derive(Serialize)]
struct ToastContext {
    /// Already quoted as a single-quoted literal
    app_id: String,
    title: String,
    message: String,
    icon: String,
    activation_type: String,
    activation_arguments: String,
    duration: &'static str,
    audio: String,
    silent: bool,
    audio_loop: bool,
    actions: Vec<ActionContext>,
}

impl ToastContext {
    fn new(notification: &Notification, icon: &str) -> Self {
        Self {
            app_id: quote_powershell_literal(if notification.app_id.is_empty() {
                FALLBACK_APP_ID
            } else {
                notification.app_id.as_str()
            }),
            title: escape_powershell(&notification.title),
            message: escape_powershell(&notification.message),
            icon: escape_powershell(icon),
            activation_type: escape_powershell(&notification.activation_type),
            activation_arguments: escape_powershell(&notification.activation_arguments),
            duration: notification.duration.as_str(),
            audio: escape_powershell(notification.audio.as_str()),
            silent: notification.audio.is_silent(),
            audio_loop: notification.audio_loop,
            actions: notification
                .actions
                .iter()
                .map(|action| ActionContext {
                    kind: escape_powershell(&action.kind),
                    label: escape_powershell(&action.label),
                    arguments: escape_powershell(&action.arguments),
                })
                .collect(),
        }
    }
}

/// Render the PowerShell script for a notification.
///
/// `icon` is the image location to embed (empty for none). Values are
/// PowerShell-escaped but not XML-escaped: `<` or `&` in an attribute value
/// produces a document the toast API rejects.
pub fn render_toast_script(notification: &Notification, icon: &str) -> Result<String, ToastError> {
    let env = template_env()?;
    let template = env
        .get_template(TEMPLATE_NAME)
        .map_err(|e| ToastError::TemplateParse(e.to_string()))?;
    template
        .render(ToastContext::new(notification, icon))
        .map_err(|e| ToastError::TemplateRender(e.to_string()))
}

/// Command that evaluates the script file, then removes the staged icon
/// after a short delay so the renderer has read it.
pub fn launch_command(script: &Path, icon: Option<&Path>) -> String {
    let mut launch = format!(
        "(Get-Content -Encoding UTF8 -Path {} -Raw) | Invoke-Expression",
        quote_powershell_literal(&script.to_string_lossy())
    );
    if let Some(icon) = icon {
        launch.push_str(&format!(
            "; Start-Sleep -m 50 ; Remove-Item {}",
            quote_powershell_literal(&icon.to_string_lossy())
        ));
    }
    launch
}

/// Windows toast notifier
pub struct PowerShellNotifier {
    program: String,
    temp_dir: PathBuf,
}

impl PowerShellNotifier {
    /// Create a notifier that runs `PowerShell` with scripts in the OS temp dir
    pub fn new() -> Self {
        Self::with_program(POWERSHELL)
    }

    /// Create with a custom interpreter name
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Stage scripts and icons in `dir` instead of the OS temp dir
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }
}

impl Default for PowerShellNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for PowerShellNotifier {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn push(&self, notification: Notification) -> Result<(), ToastError> {
        // Refuse before any artifact is written
        let program = resolve_executable(&self.program)?;

        let icon_file = match &notification.icon {
            Some(IconSource::Raw(bytes)) => Some(stage_temp_file(
                &self.temp_dir,
                "toast-logo-",
                ".png",
                bytes,
            )?),
            _ => None,
        };
        let icon = match (&icon_file, &notification.icon) {
            (Some(staged), _) => staged.to_string_lossy().into_owned(),
            (None, Some(IconSource::Path(path))) => path.clone(),
            _ => String::new(),
        };

        let script = render_toast_script(&notification, &icon)?;
        let script_file = stage_temp_file(&self.temp_dir, "toast-", ".ps1", script.as_bytes())?;

        let launch = launch_command(&script_file, icon_file.as_deref());
        let result = run_hidden(
            &self.program,
            &program,
            ["-ExecutionPolicy", "Bypass", launch.as_str()],
        );

        discard_temp_file(script_file);
        if let Some(icon_file) = icon_file {
            discard_temp_file(icon_file);
        }
        result
    }
}

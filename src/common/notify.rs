// src/common/notify.rs

// Canal de feedback para o usuário (os "toasts" do frontend).
// Fire-and-forget: nenhuma operação espera confirmação daqui.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

// Implementação padrão: apenas registra no log estruturado.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("✅ {message}");
    }

    fn failure(&self, message: &str) {
        tracing::warn!("⚠️ {message}");
    }
}

// Captura as mensagens para os testes inspecionarem.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: std::sync::Mutex<Vec<String>>,
    pub failures: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn failure(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }
}

/// Métodos que nunca llevan la cabecera anti-CSRF
pub const SAFE_METHODS: [&str; 4] = ["GET", "HEAD", "OPTIONS", "TRACE"];

/// Clase CSS que ocultan los templates (Bootstrap 3 `.hidden`)
pub const HIDDEN_CLASS: &str = "hidden";

/// Marca de un solo uso en imágenes que ya recibieron el placeholder
pub const FALLBACK_APPLIED_ATTR: &str = "data-fallback-applied";

/// Clase del popover de perfil; el contenido HTML va en `.popover-content`
pub const POPOVER_CLASS: &str = "popover";
pub const POPOVER_CONTENT_CLASS: &str = "popover-content";

/// Margen entre el disparador y el popover, en píxeles
pub const POPOVER_OFFSET_PX: f64 = 8.0;

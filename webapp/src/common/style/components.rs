pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid transparent;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: translateY(1px);
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-outline {
  background-color: transparent;
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-outline:hover {
  background-color: var(--surface);
}

.btn-icon {
  width: 40px;
  height: 40px;
  padding: 0;
  border-radius: var(--radius-full);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  box-shadow: var(--shadow-md);
}

.card-header {
  padding: var(--space-4) var(--space-4) var(--space-2);
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.card-subtitle {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.card-content {
  padding: 0 var(--space-4) var(--space-4);
}

/* Badges */
.badge {
  display: inline-flex;
  align-items: center;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
  background-color: var(--primary);
  color: white;
}

.badge-secondary {
  background-color: var(--border);
  color: var(--text-primary);
}

/* Navigation */
.site-nav {
  position: sticky;
  top: 0;
  z-index: 20;
  background-color: var(--nav-background);
  backdrop-filter: blur(8px);
  transition: background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.site-nav.scrolled {
  background-color: var(--nav-background-scrolled);
  box-shadow: var(--shadow-md);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
  background: none;
  border: none;
  cursor: pointer;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover {
  color: var(--text-primary);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(124, 58, 237, 0.1);
}

.nav-menu-button {
  display: none;
}

.nav-dropdown {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-4);
  background-color: var(--surface);
  border-top: 1px solid var(--border);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .nav-menu-button {
    display: inline-flex;
  }
}

/* Typing caret */
.typing-text {
  color: var(--primary);
  font-weight: 600;
}

.typing-caret {
  margin-left: 2px;
  animation: caret-blink 1s step-end infinite;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

/* Splash */
.splash {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--background);
  z-index: 50;
}

.splash-mark {
  width: 64px;
  height: 64px;
  border-radius: var(--radius-lg);
  background: linear-gradient(135deg, var(--primary), var(--accent));
  animation: splash-spin 2s var(--easing-standard) infinite;
}

@keyframes splash-spin {
  0%   { transform: scale(1) rotate(0deg); border-radius: var(--radius-lg); }
  50%  { transform: scale(1.5) rotate(180deg); border-radius: var(--radius-full); }
  100% { transform: scale(1) rotate(360deg); border-radius: var(--radius-lg); }
}

/* Logo transition */
.logo-transition {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--primary-dark), var(--accent));
  z-index: 50;
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

.logo-transition-spin {
  position: relative;
  width: 120px;
  height: 120px;
  font-size: 4rem;
  font-weight: 700;
  color: white;
}

.logo-transition-monogram,
.logo-transition-mark {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
}

.logo-transition-monogram {
  animation: spin-out 0.75s var(--easing-standard) forwards;
}

.logo-transition-mark {
  opacity: 0;
  animation: spin-in 0.75s var(--easing-standard) 0.75s forwards;
}

@keyframes spin-out {
  to { transform: rotate(180deg) scale(0); opacity: 0; }
}

@keyframes spin-in {
  from { transform: rotate(-180deg) scale(0); opacity: 0; }
  to   { transform: rotate(0deg) scale(1); opacity: 1; }
}

@keyframes fade-in {
  from { opacity: 0; }
  to   { opacity: 1; }
}
"#;

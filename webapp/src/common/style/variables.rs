pub const CSS_VARIABLES: &str = r#"
:root {
  /* Palette */
  --primary: #7C3AED;          /* violet used for links and primary buttons */
  --primary-light: #A78BFA;
  --primary-dark: #5B21B6;
  --accent: #EC4899;           /* pink end of the hero gradient */

  /* Neutrals */
  --neutral-50: #FAFAFA;
  --neutral-100: #F4F4F5;
  --neutral-200: #E4E4E7;
  --neutral-300: #D4D4D8;
  --neutral-400: #A1A1AA;
  --neutral-500: #71717A;
  --neutral-600: #52525B;
  --neutral-700: #3F3F46;
  --neutral-800: #27272A;
  --neutral-900: #18181B;

  /* Layout */
  --header-height: 64px;
  --container-width: 1120px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Radius */
  --radius-md: 6px;
  --radius-lg: 10px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* the theme classes sit on the shell, so everything below it picks them up */
.theme-light {
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --border: var(--neutral-200);
  --nav-background: rgba(255, 255, 255, 0.6);
  --nav-background-scrolled: rgba(255, 255, 255, 0.95);
}

.theme-dark {
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-400);
  --border: var(--neutral-700);
  --nav-background: rgba(24, 24, 27, 0.6);
  --nav-background-scrolled: rgba(24, 24, 27, 0.95);
}
"#;
